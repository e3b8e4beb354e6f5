//! Translation coverage check.
//!
//! Every key should exist in both languages, and every key the catalog
//! mentions should resolve. Violations are reported, never raised: the
//! running UI falls back to raw keys regardless.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::SystemCatalog;
use crate::i18n::{Language, TranslationTable};

/// One coverage problem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoverageIssue {
    /// Key defined in `present` but missing from `missing`
    Unpaired {
        key: String,
        present: Language,
        missing: Language,
    },
    /// Key referenced by a catalog entry but absent from a language
    Unresolved {
        system: String,
        key: String,
        language: Language,
    },
}

impl fmt::Display for CoverageIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageIssue::Unpaired {
                key,
                present,
                missing,
            } => write!(f, "key '{}' exists in '{}' but not in '{}'", key, present, missing),
            CoverageIssue::Unresolved {
                system,
                key,
                language,
            } => write!(
                f,
                "system '{}' references key '{}' missing in '{}'",
                system, key, language
            ),
        }
    }
}

/// Result of checking a translation table against a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub issues: Vec<CoverageIssue>,
}

impl CoverageReport {
    pub fn check(translations: &TranslationTable, catalog: &SystemCatalog) -> Self {
        let mut issues = BTreeSet::new();

        for present in Language::ALL {
            let missing = present.toggled();
            for key in translations.keys(present) {
                if !translations.contains(missing, key) {
                    issues.insert(CoverageIssue::Unpaired {
                        key: key.to_string(),
                        present,
                        missing,
                    });
                }
            }
        }

        for (system, key) in catalog.referenced_keys() {
            for language in Language::ALL {
                if !translations.contains(language, key) {
                    issues.insert(CoverageIssue::Unresolved {
                        system: system.to_string(),
                        key: key.to_string(),
                        language,
                    });
                }
            }
        }

        Self {
            issues: issues.into_iter().collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Log each issue at warn level. Returns the issue count.
    pub fn log(&self) -> usize {
        for issue in &self.issues {
            tracing::warn!("translation coverage: {}", issue);
        }
        self.issues.len()
    }
}
