use super::*;

fn identity(email: &str, phone: &str) -> Identity {
    Identity {
        id: "u-1".to_owned(),
        name: String::new(),
        email: email.to_owned(),
        phone: phone.to_owned(),
    }
}

// =============================================================
// Guest classification
// =============================================================

#[test]
fn identity_without_email_or_phone_is_guest() {
    assert!(identity("", "").is_guest());
}

#[test]
fn identity_with_email_is_not_guest() {
    assert!(!identity("a@b.c", "").is_guest());
}

#[test]
fn identity_with_phone_is_not_guest() {
    assert!(!identity("", "+15551234567").is_guest());
}

#[test]
fn identity_with_both_is_not_guest() {
    assert!(!identity("a@b.c", "+15551234567").is_guest());
}

// =============================================================
// Label precedence: name, then email, then "Guest"
// =============================================================

#[test]
fn label_prefers_name() {
    let mut id = identity("a@b.c", "");
    id.name = "Ada".to_owned();
    assert_eq!(id.label(), "Ada");
}

#[test]
fn label_falls_back_to_email() {
    assert_eq!(identity("a@b.c", "").label(), "a@b.c");
}

#[test]
fn label_defaults_to_guest() {
    assert_eq!(identity("", "").label(), "Guest");
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn identity_deserializes_backend_shape() {
    let id: Identity = serde_json::from_str(
        r#"{"$id":"u-9","name":"Ada","email":"a@b.c","phone":""}"#,
    )
    .expect("identity");
    assert_eq!(id.id, "u-9");
    assert_eq!(id.name, "Ada");
    assert_eq!(id.email, "a@b.c");
    assert!(!id.is_guest());
}

#[test]
fn session_deserializes_expiry() {
    let s: Session =
        serde_json::from_str(r#"{"$id":"s-1","expire":"2026-01-01T00:00:00.000+00:00"}"#)
            .expect("session");
    assert_eq!(s.expire, "2026-01-01T00:00:00.000+00:00");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_appends_code_parenthetically() {
    let e = ApiError::new(Some(409), "user already exists");
    assert_eq!(e.to_string(), "user already exists (code 409)");
}

#[test]
fn api_error_without_code_is_message_only() {
    let e = ApiError::new(None, "network down");
    assert_eq!(e.to_string(), "network down");
}

#[test]
fn only_401_counts_as_unauthenticated() {
    assert!(ApiError::new(Some(401), "unauthorized").is_unauthenticated());
    assert!(!ApiError::new(Some(403), "forbidden").is_unauthenticated());
    assert!(!ApiError::new(None, "boom").is_unauthenticated());
}
