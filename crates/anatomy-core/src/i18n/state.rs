//! Current-language state and the document directionality side effect.

use super::{Direction, Language};

/// Receives the document-level attributes that follow the current language.
///
/// The desktop app writes `dir` and `lang` on the root element of the
/// webview; tests record the calls.
pub trait DocumentSink {
    /// Apply writing direction and language tag to the document root.
    fn apply(&mut self, direction: Direction, lang_tag: &str);
}

/// [`DocumentSink`] that keeps every applied pair, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDocument {
    pub applied: Vec<(Direction, String)>,
}

impl RecordingDocument {
    /// The most recently applied attributes, if any.
    pub fn last(&self) -> Option<(Direction, &str)> {
        self.applied
            .last()
            .map(|(direction, tag)| (*direction, tag.as_str()))
    }
}

impl DocumentSink for RecordingDocument {
    fn apply(&mut self, direction: Direction, lang_tag: &str) {
        self.applied.push((direction, lang_tag.to_string()));
    }
}

/// Holds the active language. Transitions are unconditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageState {
    current: Language,
}

impl LanguageState {
    pub fn new(language: Language) -> Self {
        Self { current: language }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Replace the active language and return the previous one.
    pub fn set(&mut self, language: Language) -> Language {
        std::mem::replace(&mut self.current, language)
    }

    /// Switch to the other language and return the new one.
    pub fn toggle(&mut self) -> Language {
        self.current = self.current.toggled();
        self.current
    }

    /// Derived from the current language; never stored separately.
    pub fn direction(&self) -> Direction {
        self.current.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }
}
