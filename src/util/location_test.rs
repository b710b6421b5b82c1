use super::*;

fn pairs(query: &str) -> Vec<(String, String)> {
    parse_query(query)
}

// =============================================================
// Query parsing
// =============================================================

#[test]
fn parse_query_splits_and_decodes() {
    let p = pairs("?userId=u1&secret=a%2Bb&note=hello+world");
    assert_eq!(p[0], ("userId".to_owned(), "u1".to_owned()));
    assert_eq!(p[1], ("secret".to_owned(), "a+b".to_owned()));
    assert_eq!(p[2], ("note".to_owned(), "hello world".to_owned()));
}

#[test]
fn parse_query_handles_empty_and_valueless_segments() {
    assert!(pairs("").is_empty());
    assert!(pairs("?").is_empty());
    assert_eq!(pairs("flag")[0], ("flag".to_owned(), String::new()));
}

#[test]
fn malformed_percent_sequences_pass_through() {
    assert_eq!(pairs("k=%zz")[0].1, "%zz");
    assert_eq!(pairs("k=100%")[0].1, "100%");
}

// =============================================================
// Intent classification
// =============================================================

#[test]
fn challenge_pair_yields_session_token() {
    let intent = parse_callback(&pairs("?userId=u1&secret=s1"));
    assert_eq!(
        intent,
        CallbackIntent::SessionToken {
            user_id: "u1".to_owned(),
            secret: "s1".to_owned(),
        }
    );
    assert_eq!(intent.consumed_keys(), ["userId", "secret"]);
}

#[test]
fn oauth_error_without_pair_yields_provider_error() {
    let intent = parse_callback(&pairs("?provider=google&oauth_error=1"));
    assert_eq!(
        intent,
        CallbackIntent::ProviderError {
            provider: "google".to_owned(),
        }
    );
    assert_eq!(intent.consumed_keys(), ["oauth_error"]);
}

#[test]
fn recovery_flag_routes_the_pair_to_password_confirmation() {
    let intent = parse_callback(&pairs("?recovery=1&userId=u1&secret=s1"));
    assert_eq!(
        intent,
        CallbackIntent::Recovery {
            user_id: "u1".to_owned(),
            secret: "s1".to_owned(),
        }
    );
    assert_eq!(intent.consumed_keys(), ["userId", "secret", "recovery"]);
}

#[test]
fn recovery_flag_without_pair_is_a_no_op() {
    assert_eq!(parse_callback(&pairs("?recovery=1")), CallbackIntent::None);
    assert_eq!(
        parse_callback(&pairs("?recovery=1&userId=u1")),
        CallbackIntent::None
    );
}

#[test]
fn challenge_pair_wins_over_error_flag() {
    let intent = parse_callback(&pairs("?provider=github&oauth_error=1&userId=u1&secret=s1"));
    assert!(matches!(intent, CallbackIntent::SessionToken { .. }));
}

#[test]
fn provider_error_message_names_the_provider() {
    let intent = parse_callback(&pairs("?provider=google&oauth_error=1"));
    let CallbackIntent::ProviderError { provider } = intent else {
        panic!("expected provider error");
    };
    assert!(provider_error_message(&provider).contains("google"));
}

#[test]
fn incomplete_or_empty_patterns_are_no_ops() {
    assert_eq!(parse_callback(&pairs("?userId=u1")), CallbackIntent::None);
    assert_eq!(parse_callback(&pairs("?secret=s1")), CallbackIntent::None);
    assert_eq!(parse_callback(&pairs("?oauth_error=1")), CallbackIntent::None);
    assert_eq!(parse_callback(&pairs("?userId=&secret=s1")), CallbackIntent::None);
    assert_eq!(parse_callback(&pairs("")), CallbackIntent::None);
}

// =============================================================
// Stripping: exactly once, idempotent
// =============================================================

#[test]
fn strip_removes_only_the_named_keys() {
    let stripped = strip_params("userId=u1&secret=s1&legal=tos", &["userId", "secret"]);
    assert_eq!(stripped, "legal=tos");
}

#[test]
fn strip_is_idempotent() {
    let once = strip_params("provider=google&oauth_error=1", &["oauth_error"]);
    let twice = strip_params(&once, &["oauth_error"]);
    assert_eq!(once, "provider=google");
    assert_eq!(once, twice);
}

#[test]
fn strip_of_all_keys_leaves_empty_query() {
    assert_eq!(strip_params("?userId=u1&secret=s1", &["userId", "secret"]), "");
}

// =============================================================
// Legal panel hint
// =============================================================

#[test]
fn legal_param_round_trip() {
    assert_eq!(parse_legal(&pairs("?legal=privacy")), Some(LegalDoc::Privacy));
    assert_eq!(parse_legal(&pairs("?legal=tos")), Some(LegalDoc::Tos));
    assert_eq!(parse_legal(&pairs("?legal=bogus")), None);
    assert_eq!(parse_legal(&pairs("")), None);
}

#[test]
fn set_param_replaces_existing_value() {
    let q = set_param("legal=privacy&x=1", "legal", "tos");
    assert_eq!(q, "x=1&legal=tos");
    let q = set_param("", "legal", "privacy");
    assert_eq!(q, "legal=privacy");
}
