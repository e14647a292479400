//! Bilingual text handling.
//!
//! Every customer-facing string in the catalog carries an English and a
//! Georgian rendering. Georgian may lag behind English during data entry,
//! so reads fall back to English rather than showing an empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storefront display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ka,
}

impl Lang {
    /// Get the two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ka => "ka",
        }
    }

    /// Parse a language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" => Some(Lang::En),
            "ka" => Some(Lang::Ka),
            _ => None,
        }
    }
}

/// An English/Georgian text pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    /// English rendering.
    pub en: String,
    /// Georgian rendering (may be empty while translation is pending).
    pub ka: String,
}

impl LocalizedText {
    /// Create a text pair with both renderings.
    pub fn new(en: impl Into<String>, ka: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ka: ka.into(),
        }
    }

    /// Create an English-only text pair.
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ka: String::new(),
        }
    }

    /// Get the rendering for a language, falling back to English when the
    /// Georgian field is empty.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ka if self.ka.is_empty() => &self.en,
            Lang::Ka => &self.ka,
        }
    }

    /// Check whether both renderings are empty.
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ka.is_empty()
    }

    /// Check whether the Georgian rendering is present.
    pub fn has_georgian(&self) -> bool {
        !self.ka.is_empty()
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get(Lang::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_both_languages() {
        let text = LocalizedText::new("Plate Carrier", "\u{10e4}\u{10da}\u{10d4}\u{10d8}\u{10d7} \u{10d9}\u{10d4}\u{10e0}\u{10d8}\u{10d4}\u{10e0}\u{10d8}");
        assert_eq!(text.get(Lang::En), "Plate Carrier");
        assert!(text.has_georgian());
        assert_ne!(text.get(Lang::Ka), text.get(Lang::En));
    }

    #[test]
    fn test_georgian_falls_back_to_english() {
        let text = LocalizedText::english("Gloves");
        assert_eq!(text.get(Lang::Ka), "Gloves");
        assert!(!text.has_georgian());
    }

    #[test]
    fn test_lang_codes() {
        assert_eq!(Lang::from_code("KA"), Some(Lang::Ka));
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::En.code(), "en");
    }
}
