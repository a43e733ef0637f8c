use std::collections::BTreeSet;

use xlsheet::error::LoadError;
use xlsheet::state::i18n::{self, Language};

#[test]
fn test_default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(i18n::tr(Language::default(), "toolbar.open"), "Open");
}

#[test]
fn test_language_switch_changes_ui_text() {
    assert_eq!(i18n::tr(Language::En, "toolbar.loading"), "Processing file...");
    assert_eq!(i18n::tr(Language::Es, "toolbar.loading"), "Procesando archivo...");
}

#[test]
fn test_unknown_key_returns_key() {
    assert_eq!(i18n::tr(Language::En, "no.such.key"), "no.such.key");
}

#[test]
fn test_language_code_roundtrip() {
    assert_eq!(Language::from_code("en"), Some(Language::En));
    assert_eq!(Language::from_code("es"), Some(Language::Es));
    assert_eq!(Language::from_code("unknown"), None);
}

#[test]
fn test_every_load_error_has_a_message() {
    let errors = [
        LoadError::Read(String::new()),
        LoadError::Parse(String::new()),
        LoadError::EmptyData,
    ];
    for err in errors {
        let key = err.message_key();
        assert_ne!(i18n::tr(Language::En, key), key);
        assert_ne!(i18n::tr(Language::Es, key), key);
    }
    assert_eq!(
        i18n::tr(Language::Es, LoadError::EmptyData.message_key()),
        "El archivo no contiene datos"
    );
}

#[test]
fn test_tr_args_fills_placeholders() {
    assert_eq!(
        i18n::tr_args(Language::En, "toolbar.row_count", &[("visible", "2"), ("total", "5")]),
        "2 of 5 rows"
    );
    assert_eq!(
        i18n::tr_args(Language::Es, "toolbar.row_count", &[("visible", "2"), ("total", "5")]),
        "2 de 5 filas"
    );
    assert_eq!(
        i18n::tr_args(Language::Es, "filter.placeholder", &[("column", "Name")]),
        "Filtrar Name"
    );
}

#[test]
fn test_tr_args_leaves_unmatched_placeholders() {
    assert_eq!(
        i18n::tr_args(Language::En, "toolbar.row_count", &[("visible", "3")]),
        "3 of {total} rows"
    );
    assert_eq!(
        i18n::tr_args(Language::En, "filter.placeholder", &[]),
        "Filter {column}"
    );
}

#[test]
fn test_tr_args_value_is_not_reexpanded() {
    assert_eq!(
        i18n::tr_args(Language::En, "filter.placeholder", &[("column", "{column}")]),
        "Filter {column}"
    );
}

#[test]
fn test_catalogs_have_the_same_keys() {
    let en: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("../assets/i18n/en.json"))
            .expect("en.json should be valid JSON object");
    let es: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("../assets/i18n/es.json"))
            .expect("es.json should be valid JSON object");

    let en_keys: BTreeSet<&str> = en.keys().map(String::as_str).collect();
    let es_keys: BTreeSet<&str> = es.keys().map(String::as_str).collect();

    let missing_in_es: Vec<&str> = en_keys.difference(&es_keys).copied().collect();
    let missing_in_en: Vec<&str> = es_keys.difference(&en_keys).copied().collect();

    assert!(
        missing_in_es.is_empty(),
        "es catalog is missing keys: {}",
        missing_in_es.join(", ")
    );
    assert!(
        missing_in_en.is_empty(),
        "en catalog is missing keys: {}",
        missing_in_en.join(", ")
    );
}
