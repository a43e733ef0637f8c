use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Es]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => "language.option.en",
            Self::Es => "language.option.es",
        }
    }
}

/// Looks `key` up in the catalog for `language`, then in English, then
/// returns the key itself.
pub fn tr(language: Language, key: &'static str) -> &'static str {
    lookup(catalog(language), catalog(Language::En), key)
}

/// [`tr`] with `{name}` placeholders replaced by the matching argument.
/// Placeholders without an argument are left as written.
pub fn tr_args(language: Language, key: &'static str, args: &[(&str, &str)]) -> String {
    substitute(tr(language, key), args)
}

fn lookup<'a>(
    primary: &'a BTreeMap<String, String>,
    fallback: &'a BTreeMap<String, String>,
    key: &'a str,
) -> &'a str {
    primary
        .get(key)
        .or_else(|| fallback.get(key))
        .map(String::as_str)
        .unwrap_or(key)
}

fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

fn catalog(language: Language) -> &'static BTreeMap<String, String> {
    match language {
        Language::En => EN_CATALOG.get_or_init(|| parse_catalog(Language::En)),
        Language::Es => ES_CATALOG.get_or_init(|| parse_catalog(Language::Es)),
    }
}

fn parse_catalog(language: Language) -> BTreeMap<String, String> {
    let source = match language {
        Language::En => include_str!("../../assets/i18n/en.json"),
        Language::Es => include_str!("../../assets/i18n/es.json"),
    };

    serde_json::from_str(source).unwrap_or_else(|err| {
        panic!(
            "failed to parse i18n catalog for language '{}': {err}",
            language.code()
        )
    })
}

static EN_CATALOG: OnceLock<BTreeMap<String, String>> = OnceLock::new();
static ES_CATALOG: OnceLock<BTreeMap<String, String>> = OnceLock::new();

