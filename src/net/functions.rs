//! Client for the downstream "advanced action" proxy.
//!
//! A single request/response endpoint, decoupled from authentication: it
//! takes an action name plus free-form text and answers with either
//! `{ "message": ... }` or `{ "error": ... }`.

#[cfg(test)]
#[path = "functions_test.rs"]
mod functions_test;

/// Proxy endpoint URL.
pub fn advanced_url() -> &'static str {
    option_env!("AUTH_PORTAL_ADVANCED_URL").unwrap_or("http://localhost:3001/api/advanced")
}

/// Interpret the proxy's response body: `message` on success, `error` on
/// failure, anything else is an invalid response.
pub fn parse_advanced_response(value: &serde_json::Value) -> Result<String, String> {
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Ok(message.to_owned());
    }
    if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
        return Err(error.to_owned());
    }
    Err("Invalid response from backend".to_owned())
}

/// POST an action + text payload to the proxy and return its message.
#[allow(clippy::unused_async)]
pub async fn call_advanced(text: &str, action: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "text": text, "action": action });
        let resp = gloo_net::http::Request::post(advanced_url())
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|_| "Invalid response from backend".to_owned())?;
        parse_advanced_response(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, action);
        Err("not available on server".to_owned())
    }
}
