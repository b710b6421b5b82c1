use super::*;

fn identity(email: &str) -> Identity {
    Identity {
        id: "u-1".to_owned(),
        name: "User".to_owned(),
        email: email.to_owned(),
        phone: String::new(),
    }
}

// =============================================================
// Initial probe classification
// =============================================================

#[test]
fn probe_success_enters_authenticated_with_identity() {
    let mut state = AuthState::default();
    state.probe_finished(Ok(identity("a@b.c")));
    assert_eq!(state.mode, AuthMode::Authenticated);
    assert_eq!(state.identity.as_ref().map(|i| i.email.as_str()), Some("a@b.c"));
    assert!(state.banner.is_none());
}

#[test]
fn probe_401_settles_on_landing_without_banner() {
    let mut state = AuthState::default();
    state.probe_finished(Err(ApiError::new(Some(401), "unauthorized")));
    assert_eq!(state.mode, AuthMode::Landing);
    assert!(state.identity.is_none());
    assert!(state.banner.is_none());
}

#[test]
fn probe_other_failure_settles_on_landing_with_banner() {
    let mut state = AuthState::default();
    state.probe_finished(Err(ApiError::new(Some(500), "server exploded")));
    assert_eq!(state.mode, AuthMode::Landing);
    assert_eq!(state.banner.as_deref(), Some("server exploded (code 500)"));
}

#[test]
fn probe_failure_in_email_mode_keeps_email_mode() {
    let mut state = AuthState::default();
    state.probe_finished(Err(ApiError::new(Some(401), "unauthorized")));
    state.choose_email(EmailMode::Login);
    state.probe_finished(Err(ApiError::new(Some(401), "unauthorized")));
    assert_eq!(state.mode, AuthMode::Email(EmailMode::Login));
}

// =============================================================
// Mode transitions
// =============================================================

#[test]
fn choose_email_from_landing() {
    let mut state = AuthState::default();
    state.probe_finished(Err(ApiError::new(Some(401), "unauthorized")));
    state.choose_email(EmailMode::Register);
    assert_eq!(state.mode, AuthMode::Email(EmailMode::Register));
    state.back_to_landing();
    assert_eq!(state.mode, AuthMode::Landing);
}

#[test]
fn collector_failure_surfaces_without_mode_change() {
    let mut state = AuthState::default();
    state.choose_email(EmailMode::Login);
    state.collector_failed(&ApiError::new(Some(429), "too many requests"));
    assert_eq!(state.mode, AuthMode::Email(EmailMode::Login));
    assert_eq!(state.banner.as_deref(), Some("too many requests (code 429)"));
}

#[test]
fn collector_success_reaches_authenticated_via_refetch() {
    // Register then log in with the same credentials: each success re-runs
    // the identity probe, which is what flips the mode.
    let mut state = AuthState::default();
    state.choose_email(EmailMode::Register);
    state.probe_finished(Ok(identity("a@b.c")));
    assert!(state.is_authenticated());

    state.signed_out();
    state.choose_email(EmailMode::Login);
    state.probe_finished(Ok(identity("a@b.c")));
    assert!(state.is_authenticated());
}

#[test]
fn signed_out_clears_identity_and_returns_to_landing() {
    let mut state = AuthState::default();
    state.probe_finished(Ok(identity("a@b.c")));
    state.signed_out();
    assert_eq!(state.mode, AuthMode::Landing);
    assert!(state.identity.is_none());
    assert!(state.banner.is_none());
}

#[test]
fn banner_is_dismissible() {
    let mut state = AuthState::default();
    state.set_banner("oops");
    state.dismiss_banner();
    assert!(state.banner.is_none());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn email_validation_requires_local_at_dotted_domain() {
    assert!(email_valid("a@b.c"));
    assert!(email_valid("user.name@example.co.uk"));
    assert!(!email_valid(""));
    assert!(!email_valid("plain"));
    assert!(!email_valid("@b.c"));
    assert!(!email_valid("a@nodot"));
    assert!(!email_valid("a@.c"));
    assert!(!email_valid("a@b."));
    assert!(!email_valid("a@b@c.d"));
}

#[test]
fn password_validation_requires_eight_chars() {
    assert!(password_valid("password1"));
    assert!(password_valid("12345678"));
    assert!(!password_valid("1234567"));
    assert!(!password_valid(""));
}

#[test]
fn phone_validation_accepts_e164_shapes() {
    assert!(phone_valid("+15551234567"));
    assert!(phone_valid("5551234567"));
    assert!(phone_valid("+4915112345678"));
    assert!(!phone_valid(""));
    assert!(!phone_valid("+1"));
    assert!(!phone_valid("555-123-4567"));
    assert!(!phone_valid("+1234567890123456"));
}
