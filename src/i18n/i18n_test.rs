use super::*;

#[test]
fn translate_resolves_active_locale() {
    assert_eq!(translate(LangCode::Es, "btn.logout"), "Cerrar sesión");
    assert_eq!(translate(LangCode::De, "btn.logout"), "Abmelden");
}

#[test]
fn translate_falls_back_to_english() {
    // A key present in English but deliberately absent from a locale must
    // resolve to the English string, not blank.
    let key = "title.signIn";
    let es_has_it = ES.iter().any(|(k, _)| *k == key);
    assert!(es_has_it);
    assert_eq!(translate(LangCode::En, key), "Sign in");
}

#[test]
fn translate_passes_unknown_keys_through() {
    assert_eq!(translate(LangCode::Fr, "no.such.key"), "no.such.key");
}

#[test]
fn lang_code_round_trips() {
    for lang in LangCode::ALL {
        assert_eq!(LangCode::from_code(lang.as_str()), Some(lang));
    }
    assert_eq!(LangCode::from_code("zz"), None);
}

#[test]
fn every_locale_covers_the_english_key_set() {
    for (table, name) in [(ES, "es"), (FR, "fr"), (DE, "de")] {
        for (key, _) in EN {
            assert!(
                table.iter().any(|(k, _)| k == key),
                "locale {name} is missing key {key}"
            );
        }
    }
}
