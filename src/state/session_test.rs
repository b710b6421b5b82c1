use super::*;

fn session(expire: &str) -> Session {
    Session {
        id: "s-1".to_owned(),
        expire: expire.to_owned(),
    }
}

#[test]
fn refresh_success_sets_displayed_expiry() {
    let mut state = SessionState::default();
    state.busy = true;
    state.refresh_finished(Ok(session("2026-01-01T00:00:00+00:00")));
    assert_eq!(state.expires_at.as_deref(), Some("2026-01-01T00:00:00+00:00"));
    assert!(state.error.is_none());
    assert!(!state.busy);
}

#[test]
fn refresh_unauthenticated_clears_expiry_silently() {
    let mut state = SessionState::default();
    state.refresh_finished(Ok(session("2026-01-01T00:00:00+00:00")));
    state.refresh_finished(Err(ApiError::new(Some(401), "unauthorized")));
    assert!(state.expires_at.is_none());
    assert!(state.error.is_none());
}

#[test]
fn refresh_failure_surfaces_and_keeps_last_good_expiry() {
    let mut state = SessionState::default();
    state.refresh_finished(Ok(session("2026-01-01T00:00:00+00:00")));
    state.refresh_finished(Err(ApiError::new(Some(500), "backend down")));
    assert_eq!(state.expires_at.as_deref(), Some("2026-01-01T00:00:00+00:00"));
    assert_eq!(state.error.as_deref(), Some("backend down (code 500)"));
}

#[test]
fn extend_failure_keeps_stale_expiry() {
    let mut state = SessionState::default();
    state.refresh_finished(Ok(session("2026-01-01T00:00:00+00:00")));
    state.extend_failed(&ApiError::new(Some(503), "unavailable"));
    assert_eq!(state.expires_at.as_deref(), Some("2026-01-01T00:00:00+00:00"));
    assert_eq!(state.error.as_deref(), Some("unavailable (code 503)"));
}

#[test]
fn extension_only_updates_display_through_refresh() {
    let mut state = SessionState::default();
    state.refresh_finished(Ok(session("2026-01-01T00:00:00+00:00")));
    // The follow-up refresh after a successful extend delivers the new value
    // and invalidates the previously displayed one.
    state.refresh_finished(Ok(session("2026-02-01T00:00:00+00:00")));
    assert_eq!(state.expires_at.as_deref(), Some("2026-02-01T00:00:00+00:00"));
}
