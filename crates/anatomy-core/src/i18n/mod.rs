//! Localization: supported languages, the translation table and the
//! current-language state.
//!
//! Two languages ship with the explorer. English is the primary language
//! and reads left-to-right; Arabic is the secondary language and reads
//! right-to-left.

mod state;
mod table;

use std::fmt;
use std::str::FromStr;

use crate::error::ExplorerError;

pub use state::{DocumentSink, LanguageState, RecordingDocument};
pub use table::TranslationTable;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// Primary language (`en`)
    #[default]
    English,
    /// Secondary language (`ar`), written right-to-left
    Arabic,
}

impl Language {
    /// Every supported language, primary first.
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// The language tag written to the document (`lang` attribute).
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Parse a language tag. Region subtags (`en-GB`, `ar-EG`) are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Language::English),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// Writing direction for this language.
    pub fn direction(self) -> Direction {
        match self {
            Language::English => Direction::Ltr,
            Language::Arabic => Direction::Rtl,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction().is_rtl()
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| ExplorerError::UnknownLanguage(s.to_string()))
    }
}

/// Text and layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.to_string(), lang.code());
        }
    }

    #[test]
    fn from_code_accepts_region_subtags() {
        assert_eq!(Language::from_code("en-GB"), Some(Language::English));
        assert_eq!(Language::from_code("AR_eg"), Some(Language::Arabic));
        assert_eq!(Language::from_code(" ar "), Some(Language::Arabic));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn from_str_reports_unknown_language() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownLanguage(code) if code == "de"));
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Arabic);
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert_eq!(Language::English.direction(), Direction::Ltr);
        assert_eq!(Language::Arabic.direction(), Direction::Rtl);
        assert!(!Language::English.is_rtl());
        assert!(Language::Arabic.is_rtl());
    }

    #[test]
    fn toggled_swaps_languages() {
        assert_eq!(Language::English.toggled(), Language::Arabic);
        assert_eq!(Language::Arabic.toggled(), Language::English);
    }

    #[test]
    fn direction_attr_values() {
        assert_eq!(Direction::Ltr.as_attr(), "ltr");
        assert_eq!(Direction::Rtl.as_attr(), "rtl");
        assert_eq!(Direction::default(), Direction::Ltr);
    }
}
