//! Location-parameter protocol for resumed external flows.
//!
//! Recognized query keys: `userId` + `secret` (a challenge pair from a magic
//! link, recovery link, or federated token redirect), `recovery` (routes the
//! pair to password confirmation instead of session creation), `provider` +
//! `oauth_error` (federated failure flag), and `legal` (panel-open hint).
//!
//! Parsing is pure and unit-tested; the browser read/strip glue lives at the
//! bottom behind the `hydrate` feature. Recognized parameters are consumed
//! exactly once per page load, success or failure, so a refresh cannot
//! replay them.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// What the incoming location asks the orchestrator to do. At most one
/// intent is delivered per page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackIntent {
    /// A challenge pair arrived; attempt session creation from it.
    SessionToken { user_id: String, secret: String },
    /// A recovery link arrived; confirm a new password with its pair.
    Recovery { user_id: String, secret: String },
    /// A federated login bounced back with the error flag set.
    ProviderError { provider: String },
    None,
}

impl CallbackIntent {
    /// Keys to strip from the visible location once this intent is consumed.
    pub fn consumed_keys(&self) -> &'static [&'static str] {
        match self {
            CallbackIntent::SessionToken { .. } => &["userId", "secret"],
            CallbackIntent::Recovery { .. } => &["userId", "secret", "recovery"],
            CallbackIntent::ProviderError { .. } => &["oauth_error"],
            CallbackIntent::None => &[],
        }
    }
}

/// Legal document requested via the `legal` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Tos,
}

impl LegalDoc {
    pub fn query_value(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "privacy",
            LegalDoc::Tos => "tos",
        }
    }
}

/// Classify the query pairs into the three mutually exclusive patterns. The
/// challenge pair wins over the error flag when both are present.
pub fn parse_callback(pairs: &[(String, String)]) -> CallbackIntent {
    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    };

    if let (Some(user_id), Some(secret)) = (get("userId"), get("secret")) {
        // Recovery links carry the same pair; the flag written into their
        // return URL routes them away from session creation.
        if get("recovery").is_some() {
            return CallbackIntent::Recovery { user_id, secret };
        }
        return CallbackIntent::SessionToken { user_id, secret };
    }
    if let (Some(provider), Some(_)) = (get("provider"), get("oauth_error")) {
        return CallbackIntent::ProviderError { provider };
    }
    CallbackIntent::None
}

pub fn parse_legal(pairs: &[(String, String)]) -> Option<LegalDoc> {
    pairs
        .iter()
        .find(|(k, _)| k == "legal")
        .and_then(|(_, v)| match v.as_str() {
            "privacy" => Some(LegalDoc::Privacy),
            "tos" => Some(LegalDoc::Tos),
            _ => None,
        })
}

/// Banner text for a failed federated login; must name the provider.
pub fn provider_error_message(provider: &str) -> String {
    format!(
        "Login with {provider} failed. Check the provider credentials and redirect URLs for {provider}."
    )
}

/// Split a raw query string (with or without the leading `?`) into decoded
/// key/value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((k, v)) => (percent_decode(k), percent_decode(v)),
            None => (percent_decode(segment), String::new()),
        })
        .collect()
}

/// Remove `keys` from a raw query string, preserving the order and encoding
/// of everything else. Idempotent: stripping twice is the same as once.
pub fn strip_params(query: &str, keys: &[&str]) -> String {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|s| !s.is_empty())
        .filter(|segment| {
            let raw_key = segment.split_once('=').map_or(*segment, |(k, _)| k);
            !keys.contains(&percent_decode(raw_key).as_str())
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Append or replace a key in a raw query string.
pub fn set_param(query: &str, key: &str, value: &str) -> String {
    let stripped = strip_params(query, &[key]);
    if stripped.is_empty() {
        format!("{key}={value}")
    } else {
        format!("{stripped}&{key}={value}")
    }
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

// =============================================================
// Browser glue (hydrate only)
// =============================================================

/// Read the current location's raw query string.
#[cfg(feature = "hydrate")]
pub fn read_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the visible query string without adding a history entry.
#[cfg(feature = "hydrate")]
fn replace_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

/// Strip `keys` from the visible location.
#[cfg(feature = "hydrate")]
pub fn strip_from_location(keys: &[&str]) {
    let query = read_query();
    replace_query(&strip_params(&query, keys));
}

/// Write the `legal` panel hint into the visible location.
#[cfg(feature = "hydrate")]
pub fn set_legal_param(doc: LegalDoc) {
    let query = read_query();
    replace_query(&set_param(&query, "legal", doc.query_value()));
}
