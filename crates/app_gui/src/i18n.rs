//! UI language selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Korean,
    English,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguagePreference {
    #[default]
    System,
    Korean,
    English,
}

impl LanguagePreference {
    pub fn resolve(self) -> Language {
        match self {
            LanguagePreference::Korean => Language::Korean,
            LanguagePreference::English => Language::English,
            LanguagePreference::System => language_for_locale(sys_locale::get_locale().as_deref()),
        }
    }
}

/// Korean for any `ko` locale, English otherwise.
pub fn language_for_locale(locale: Option<&str>) -> Language {
    match locale {
        Some(tag) if tag.to_ascii_lowercase().starts_with("ko") => Language::Korean,
        _ => Language::English,
    }
}

impl Language {
    pub fn pick(self, ko: &'static str, en: &'static str) -> &'static str {
        match self {
            Language::Korean => ko,
            Language::English => en,
        }
    }
}
