#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{ApiError, Session};

/// Session metadata shown in the authenticated branch.
///
/// `expires_at` always reflects the last successful refresh, never a locally
/// computed projection: an extend only changes the display through the
/// refresh it triggers.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub expires_at: Option<String>,
    pub error: Option<String>,
    pub busy: bool,
}

impl SessionState {
    /// Apply a `refresh()` outcome. 401 means the session is gone, which is
    /// a normal signal: clear the display without surfacing an error.
    pub fn refresh_finished(&mut self, result: Result<Session, ApiError>) {
        self.busy = false;
        match result {
            Ok(session) => {
                self.expires_at = Some(session.expire);
                self.error = None;
            }
            Err(e) if e.is_unauthenticated() => {
                self.expires_at = None;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// An `extend()` failed before any refresh: surface it and leave the
    /// (possibly stale) displayed expiry untouched.
    pub fn extend_failed(&mut self, error: &ApiError) {
        self.busy = false;
        self.error = Some(error.to_string());
    }
}
