//! REST client for the managed identity backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the project
//! header and cookie credentials every call needs.
//! Server-side (SSR): stubs returning [`ApiError::unavailable`] since the
//! backend is only reachable from the browser.
//!
//! Every call returns `Result<T, ApiError>`; backend rejections carry the
//! structured `{message, code}` body verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::types::{ApiError, ChallengeToken, Identity, Session};

/// Identity backend base URL, e.g. `https://cloud.appwrite.io/v1`.
pub fn endpoint() -> &'static str {
    option_env!("AUTH_PORTAL_ENDPOINT").unwrap_or("http://localhost/v1")
}

/// Backend project id sent with every request.
pub fn project_id() -> &'static str {
    option_env!("AUTH_PORTAL_PROJECT_ID").unwrap_or("auth-portal")
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
async fn send(
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = format!("{}{path}", endpoint());
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    }
    .header("X-Appwrite-Project", project_id())
    .credentials(web_sys::RequestCredentials::Include);

    let request = match body {
        Some(value) => builder
            .json(&value)
            .map_err(|e| ApiError::new(None, e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::new(None, e.to_string()))?,
    };

    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::new(None, e.to_string()))?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(parse_error(resp).await)
    }
}

/// Extract the backend's structured error body, falling back to the HTTP
/// status when the body is not the expected shape.
#[cfg(feature = "hydrate")]
async fn parse_error(resp: gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        code: Option<u16>,
    }

    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::new(
            body.code.or(Some(status)),
            body.message
                .unwrap_or_else(|| format!("request failed with status {status}")),
        ),
        Err(_) => ApiError::new(Some(status), format!("request failed with status {status}")),
    }
}

async fn request_json<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(verb, path, body).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::new(None, e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::unavailable())
    }
}

async fn request_unit(
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(verb, path, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::unavailable())
    }
}

// =============================================================
// Identity
// =============================================================

/// Fetch the identity attached to the current session.
pub async fn get_account() -> Result<Identity, ApiError> {
    request_json(Verb::Get, "/account", None).await
}

/// Register a new identity with email + password.
pub async fn create_account(email: &str, password: &str) -> Result<Identity, ApiError> {
    let body = json!({
        "userId": uuid::Uuid::new_v4().to_string(),
        "email": email,
        "password": password,
    });
    request_json(Verb::Post, "/account", Some(body)).await
}

/// Update the display name of the current identity.
pub async fn update_name(name: &str) -> Result<Identity, ApiError> {
    request_json(Verb::Patch, "/account/name", Some(json!({ "name": name }))).await
}

/// Attach or change the email on the current identity. The backend requires
/// the account password alongside the new address.
pub async fn update_email(email: &str, password: &str) -> Result<Identity, ApiError> {
    let body = json!({ "email": email, "password": password });
    request_json(Verb::Patch, "/account/email", Some(body)).await
}

// =============================================================
// Sessions
// =============================================================

/// Log in with email + password, creating a new session.
pub async fn create_email_password_session(
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let body = json!({ "email": email, "password": password });
    request_json(Verb::Post, "/account/sessions/email", Some(body)).await
}

/// Create an anonymous (guest) identity and session in one call.
pub async fn create_anonymous_session() -> Result<Session, ApiError> {
    request_json(Verb::Post, "/account/sessions/anonymous", None).await
}

/// Redeem a challenge (OTP, magic link, or federated token) for a session.
/// A challenge is consumed by this call whether it succeeds or fails.
pub async fn create_session_token(user_id: &str, secret: &str) -> Result<Session, ApiError> {
    let body = json!({ "userId": user_id, "secret": secret });
    request_json(Verb::Post, "/account/sessions/token", Some(body)).await
}

/// Fetch metadata (expiry) for the current session.
pub async fn get_session_current() -> Result<Session, ApiError> {
    request_json(Verb::Get, "/account/sessions/current", None).await
}

/// Renew the current session, issuing a fresh expiry.
pub async fn extend_session_current() -> Result<Session, ApiError> {
    request_json(Verb::Patch, "/account/sessions/current", None).await
}

/// Destroy the current session. For a guest identity this also strands the
/// account data, which is why logout is gated upstream.
pub async fn delete_session_current() -> Result<(), ApiError> {
    request_unit(Verb::Delete, "/account/sessions/current", None).await
}

// =============================================================
// Challenges
// =============================================================

/// Email a one-time code; the returned challenge id pairs with the code the
/// user types in.
pub async fn create_email_token(email: &str) -> Result<ChallengeToken, ApiError> {
    let body = json!({
        "userId": uuid::Uuid::new_v4().to_string(),
        "email": email,
        "phrase": false,
    });
    request_json(Verb::Post, "/account/tokens/email", Some(body)).await
}

/// Text a one-time code to a phone number.
pub async fn create_phone_token(phone: &str) -> Result<ChallengeToken, ApiError> {
    let body = json!({
        "userId": uuid::Uuid::new_v4().to_string(),
        "phone": phone,
    });
    request_json(Verb::Post, "/account/tokens/phone", Some(body)).await
}

/// Email a time-limited login link that lands back on `return_url` carrying
/// the `userId`/`secret` pair the callback interpreter consumes.
pub async fn create_magic_url_token(
    email: &str,
    return_url: &str,
) -> Result<ChallengeToken, ApiError> {
    let body = json!({
        "userId": uuid::Uuid::new_v4().to_string(),
        "email": email,
        "url": return_url,
        "phrase": false,
    });
    request_json(Verb::Post, "/account/tokens/magicurl", Some(body)).await
}

// =============================================================
// Password recovery
// =============================================================

/// Return target embedded in recovery emails. The `recovery` flag tells the
/// callback interpreter to route the appended `userId`/`secret` pair to
/// password confirmation instead of session creation.
pub fn recovery_return_url(origin: &str) -> String {
    format!("{origin}?recovery=1")
}

/// Request a password recovery link for `email`.
pub async fn create_recovery(email: &str, return_url: &str) -> Result<(), ApiError> {
    let body = json!({ "email": email, "url": return_url });
    request_unit(Verb::Post, "/account/recovery", Some(body)).await
}

/// Complete a recovery with the emailed secret and the new password.
pub async fn confirm_recovery(
    user_id: &str,
    secret: &str,
    password: &str,
) -> Result<(), ApiError> {
    let body = json!({ "userId": user_id, "secret": secret, "password": password });
    request_unit(Verb::Put, "/account/recovery", Some(body)).await
}

// =============================================================
// Preferences
// =============================================================

/// Fetch the free-form preference map stored on the identity.
pub async fn get_prefs() -> Result<serde_json::Map<String, serde_json::Value>, ApiError> {
    #[derive(serde::Deserialize)]
    struct Account {
        #[serde(default)]
        prefs: serde_json::Map<String, serde_json::Value>,
    }
    let account: Account = request_json(Verb::Get, "/account", None).await?;
    Ok(account.prefs)
}

/// Replace the preference map. Callers merge with [`get_prefs`] first so
/// unrelated keys survive.
pub async fn update_prefs(
    prefs: serde_json::Map<String, serde_json::Value>,
) -> Result<(), ApiError> {
    request_unit(Verb::Patch, "/account/prefs", Some(json!({ "prefs": prefs }))).await
}

// =============================================================
// Federated redirect
// =============================================================

/// Return targets a federated login embeds in its redirect: success carries
/// the challenge pair plus `provider`, failure carries the `oauth_error` flag.
pub fn oauth_return_urls(origin: &str, provider: &str) -> (String, String) {
    (
        format!("{origin}?provider={provider}"),
        format!("{origin}?oauth_error=1&provider={provider}"),
    )
}

/// Hand the browser to the provider's login page. Control returns via the
/// callback interpreter, never via this function.
#[cfg(feature = "hydrate")]
pub fn begin_oauth_redirect(provider: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::new(None, "no window"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| ApiError::new(None, "no origin"))?;
    let (success, failure) = oauth_return_urls(&origin, provider);
    let url = format!(
        "{}/account/tokens/oauth2/{provider}?project={}&success={}&failure={}",
        endpoint(),
        project_id(),
        js_sys::encode_uri_component(&success),
        js_sys::encode_uri_component(&failure),
    );
    window
        .location()
        .assign(&url)
        .map_err(|_| ApiError::new(None, "redirect failed"))
}

#[cfg(not(feature = "hydrate"))]
pub fn begin_oauth_redirect(provider: &str) -> Result<(), ApiError> {
    let _ = provider;
    Err(ApiError::unavailable())
}
