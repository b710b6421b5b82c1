use super::*;

use crate::util::location::{CallbackIntent, parse_callback, parse_query};

#[test]
fn oauth_return_urls_embed_provider_and_error_flag() {
    let (success, failure) = oauth_return_urls("https://app.test", "github");
    assert_eq!(success, "https://app.test?provider=github");
    assert_eq!(failure, "https://app.test?oauth_error=1&provider=github");
}

#[test]
fn recovery_return_url_round_trips_through_the_interpreter() {
    // The backend appends the pair to the return URL; the query we emitted
    // must route that pair to password confirmation, not session creation.
    let url = recovery_return_url("https://app.test");
    let query = format!("{}&userId=u1&secret=s1", url.split_once('?').map_or("", |(_, q)| q));
    let intent = parse_callback(&parse_query(&query));
    assert_eq!(
        intent,
        CallbackIntent::Recovery {
            user_id: "u1".to_owned(),
            secret: "s1".to_owned(),
        }
    );
}
