use super::*;

#[test]
fn response_with_message_is_ok() {
    let v = serde_json::json!({"message": "Hello Ada your api key is k-1"});
    assert_eq!(
        parse_advanced_response(&v),
        Ok("Hello Ada your api key is k-1".to_owned())
    );
}

#[test]
fn response_with_error_is_err() {
    let v = serde_json::json!({"error": "Not authenticated"});
    assert_eq!(parse_advanced_response(&v), Err("Not authenticated".to_owned()));
}

#[test]
fn message_wins_over_error_when_both_present() {
    let v = serde_json::json!({"message": "ok", "error": "nope"});
    assert_eq!(parse_advanced_response(&v), Ok("ok".to_owned()));
}

#[test]
fn unexpected_shape_is_invalid() {
    let v = serde_json::json!({"status": 200});
    assert_eq!(
        parse_advanced_response(&v),
        Err("Invalid response from backend".to_owned())
    );
}
