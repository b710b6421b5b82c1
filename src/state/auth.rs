#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{ApiError, Identity};

/// Which email credential screen is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailMode {
    #[default]
    Login,
    Register,
}

/// The mutually exclusive UI modes of the auth flow.
///
/// `Checking` is the transient state while the initial identity probe is in
/// flight; `Authenticated` is entered only after a successful identity fetch
/// in the current page lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Checking,
    Landing,
    Email(EmailMode),
    Authenticated,
}

/// Authentication state owned by the orchestrator page. Collectors report
/// outcomes through callbacks; only these methods mutate the state.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub mode: AuthMode,
    pub identity: Option<Identity>,
    /// Dismissible error banner. Backend failures land here verbatim; the
    /// expected-unauthenticated case never does.
    pub banner: Option<String>,
}

impl AuthState {
    /// Apply the outcome of an identity fetch (initial probe or the re-fetch
    /// after a collector or callback success).
    ///
    /// 401 is the normal "logged out" signal: silently settle on `Landing`.
    /// Any other failure surfaces in the banner but still settles, so the
    /// visitor can retry.
    pub fn probe_finished(&mut self, result: Result<Identity, ApiError>) {
        match result {
            Ok(identity) => {
                self.identity = Some(identity);
                self.banner = None;
                self.mode = AuthMode::Authenticated;
            }
            Err(e) => {
                self.identity = None;
                if !e.is_unauthenticated() {
                    self.banner = Some(e.to_string());
                }
                if self.mode == AuthMode::Checking || self.mode == AuthMode::Authenticated {
                    self.mode = AuthMode::Landing;
                }
            }
        }
    }

    /// `landing -> email`; no backend call involved.
    pub fn choose_email(&mut self, mode: EmailMode) {
        if self.mode != AuthMode::Authenticated {
            self.mode = AuthMode::Email(mode);
        }
    }

    pub fn back_to_landing(&mut self) {
        if self.mode != AuthMode::Authenticated {
            self.mode = AuthMode::Landing;
        }
    }

    /// A collector reported failure: surface it, never change mode.
    pub fn collector_failed(&mut self, error: &ApiError) {
        self.banner = Some(error.to_string());
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Logout completed: drop the identity and reset to the landing mode.
    pub fn signed_out(&mut self) {
        self.identity = None;
        self.banner = None;
        self.mode = AuthMode::Landing;
    }

    pub fn is_authenticated(&self) -> bool {
        self.mode == AuthMode::Authenticated
    }
}

/// Identifier validation used by every email-based collector: a local part,
/// an `@`, and a domain with at least one dot.
pub fn email_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Secrets must be at least 8 characters before submission is allowed.
pub fn password_valid(password: &str) -> bool {
    password.len() >= 8
}

/// Phone numbers are accepted in E.164 shape: an optional leading `+`
/// followed by 7 to 15 digits.
pub fn phone_valid(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (7..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
