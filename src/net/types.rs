#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// An account as reported by the identity backend.
///
/// The backend uses empty strings (not nulls) for unset email/phone, so the
/// guest check below is an emptiness check rather than an `Option` match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Identity {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl Identity {
    /// A guest (anonymous) identity has neither email nor phone attached.
    /// Its data is unrecoverable once its session ends.
    pub fn is_guest(&self) -> bool {
        self.email.is_empty() && self.phone.is_empty()
    }

    /// Human label shown in the "signed in as" line.
    pub fn label(&self) -> String {
        if !self.name.is_empty() {
            self.name.clone()
        } else if !self.email.is_empty() {
            self.email.clone()
        } else {
            "Guest".to_owned()
        }
    }
}

/// The current session as reported by the identity backend.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    /// ISO-8601 expiry timestamp. Display-only; never projected locally.
    #[serde(default)]
    pub expire: String,
}

/// A challenge token issued for OTP / magic-link flows. The secret travels
/// out of band (email, SMS, link); only the challenge id comes back here.
#[derive(Clone, Debug, Deserialize)]
pub struct ChallengeToken {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Structured failure from the identity backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.display_message())]
pub struct ApiError {
    pub code: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn new(code: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Error used by non-browser (SSR) builds where no backend is reachable.
    pub fn unavailable() -> Self {
        Self::new(None, "not available on server")
    }

    /// The backend rejects identity/session reads with 401 when no session
    /// exists. That is the normal "logged out" signal, never surfaced.
    pub fn is_unauthenticated(&self) -> bool {
        self.code == Some(401)
    }

    fn display_message(&self) -> String {
        match self.code {
            Some(code) => format!("{} (code {code})", self.message),
            None => self.message.clone(),
        }
    }
}
