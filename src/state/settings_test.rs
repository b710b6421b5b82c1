use super::*;

#[test]
fn settings_default_to_english_dark_and_no_key() {
    let state = SettingsState::default();
    assert_eq!(state.lang, LangCode::En);
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.api_key.is_empty());
}
