use super::*;

#[test]
fn challenge_sent_blocks_resend_for_thirty_ticks() {
    let mut flow = OtpFlow::default();
    assert!(!flow.resend_blocked());

    let epoch = flow.challenge_sent("u1".to_owned());
    assert_eq!(flow.resend_remaining(), RESEND_COOLDOWN_TICKS);

    for expected in (1..RESEND_COOLDOWN_TICKS).rev() {
        assert!(flow.tick(epoch));
        assert_eq!(flow.resend_remaining(), expected);
        assert!(flow.resend_blocked());
    }

    // The 30th tick hits zero and re-enables the resend action.
    assert!(!flow.tick(epoch));
    assert_eq!(flow.resend_remaining(), 0);
    assert!(!flow.resend_blocked());
}

#[test]
fn resend_restarts_full_cooldown_regardless_of_prior_sends() {
    let mut flow = OtpFlow::default();
    let first = flow.challenge_sent("u1".to_owned());
    for _ in 0..10 {
        flow.tick(first);
    }

    let second = flow.challenge_sent("u2".to_owned());
    assert_eq!(flow.resend_remaining(), RESEND_COOLDOWN_TICKS);

    // The stale task from the first send stops immediately and must not
    // decrement the new countdown.
    assert!(!flow.tick(first));
    assert_eq!(flow.resend_remaining(), RESEND_COOLDOWN_TICKS);

    assert!(flow.tick(second));
    assert_eq!(flow.resend_remaining(), RESEND_COOLDOWN_TICKS - 1);
}

#[test]
fn new_challenge_replaces_the_old_id() {
    let mut flow = OtpFlow::default();
    flow.challenge_sent("u1".to_owned());
    flow.challenge_sent("u2".to_owned());
    assert_eq!(flow.challenge_id.as_deref(), Some("u2"));
}

#[test]
fn challenge_id_survives_a_failed_verify() {
    // Verification failure discards only the typed secret; the flow keeps
    // the challenge id for another attempt.
    let mut flow = OtpFlow::default();
    flow.challenge_sent("u1".to_owned());
    assert_eq!(flow.challenge_id.as_deref(), Some("u1"));
}

#[test]
fn every_send_path_is_gated_while_a_challenge_cools_down() {
    let mut flow = OtpFlow::default();
    assert!(flow.send_allowed());

    let epoch = flow.challenge_sent("u1".to_owned());
    assert!(!flow.send_allowed());

    for _ in 0..RESEND_COOLDOWN_TICKS - 1 {
        flow.tick(epoch);
        assert!(!flow.send_allowed());
    }
    flow.tick(epoch);
    assert!(flow.send_allowed());
}

#[test]
fn tick_on_idle_cooldown_is_a_no_op() {
    let mut flow = OtpFlow::default();
    assert!(!flow.tick(0));
    assert_eq!(flow.resend_remaining(), 0);
}
