use super::*;

fn identity(email: &str, phone: &str) -> Identity {
    Identity {
        id: "u-1".to_owned(),
        name: String::new(),
        email: email.to_owned(),
        phone: phone.to_owned(),
    }
}

#[test]
fn guest_logout_requires_confirmation() {
    let gate = classify_logout(&Ok(identity("", "")));
    assert_eq!(gate, LogoutGate::ConfirmGuest);
}

#[test]
fn identity_with_email_logs_out_immediately() {
    let gate = classify_logout(&Ok(identity("a@b.c", "")));
    assert_eq!(gate, LogoutGate::Proceed);
}

#[test]
fn identity_with_phone_logs_out_immediately() {
    let gate = classify_logout(&Ok(identity("", "+15551234567")));
    assert_eq!(gate, LogoutGate::Proceed);
}

#[test]
fn failed_identity_fetch_blocks_logout() {
    // Fail closed: never destroy a session whose owner cannot be classified.
    let gate = classify_logout(&Err(ApiError::new(Some(500), "backend down")));
    assert_eq!(gate, LogoutGate::Blocked("backend down (code 500)".to_owned()));
}
