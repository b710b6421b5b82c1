//! Static translation dictionaries and locale selection.
//!
//! Pure lookup tables: `translate` resolves a key in the active locale,
//! falls back to English, and finally passes the key through unchanged so a
//! missing entry is visible instead of blank.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

mod locales;

pub use locales::{DE, EN, ES, FR};

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LangCode {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl LangCode {
    pub const ALL: [LangCode; 4] = [LangCode::En, LangCode::Es, LangCode::Fr, LangCode::De];

    pub fn as_str(self) -> &'static str {
        match self {
            LangCode::En => "en",
            LangCode::Es => "es",
            LangCode::Fr => "fr",
            LangCode::De => "de",
        }
    }

    /// Native-language label for the language selector.
    pub fn label(self) -> &'static str {
        match self {
            LangCode::En => "English",
            LangCode::Es => "Español",
            LangCode::Fr => "Français",
            LangCode::De => "Deutsch",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(LangCode::En),
            "es" => Some(LangCode::Es),
            "fr" => Some(LangCode::Fr),
            "de" => Some(LangCode::De),
            _ => None,
        }
    }
}

fn dict(lang: LangCode) -> &'static [(&'static str, &'static str)] {
    match lang {
        LangCode::En => EN,
        LangCode::Es => ES,
        LangCode::Fr => FR,
        LangCode::De => DE,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve `key` in `lang`, falling back to English, then to the key itself.
pub fn translate(lang: LangCode, key: &'static str) -> &'static str {
    lookup(dict(lang), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

const STORAGE_KEY: &str = "lang";

/// Detection order: saved locale, then the navigator language, then English.
pub fn detect() -> LangCode {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return LangCode::En,
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(saved)) = storage.get_item(STORAGE_KEY) {
                if let Some(lang) = LangCode::from_code(&saved) {
                    return lang;
                }
            }
        }
        window
            .navigator()
            .language()
            .and_then(|tag| {
                let prefix = tag.split('-').next().unwrap_or_default().to_lowercase();
                LangCode::from_code(&prefix)
            })
            .unwrap_or(LangCode::En)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LangCode::En
    }
}

/// Persist the selection and mirror it onto `<html lang>`.
pub fn persist(lang: LangCode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, lang.as_str());
            }
            if let Some(el) = window.document().and_then(|d| d.document_element()) {
                let _ = el.set_attribute("lang", lang.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}
