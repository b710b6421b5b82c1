#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::i18n::LangCode;
use crate::util::theme::Theme;

/// Process-wide presentation settings: initialized from persisted values on
/// load, written back on change. No other global state exists.
#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub lang: LangCode,
    pub theme: Theme,
    /// Optional client-side API key mirrored from backend preferences.
    pub api_key: String,
}
