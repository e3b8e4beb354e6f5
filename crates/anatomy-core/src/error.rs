//! Error types for Anatomy Explorer
//!
//! Only content loading can fail. Lookups, selection changes and language
//! switches never return errors.

use thiserror::Error;

/// Main error type for Anatomy Explorer content loading
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Language code is not one of the supported languages
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Translation document has no table for a supported language
    #[error("Missing translation table for language: {0}")]
    MissingLanguage(String),

    /// Two catalog entries share an identifier
    #[error("Duplicate system identifier: {0}")]
    DuplicateSystem(String),

    /// Catalog entry with an empty identifier
    #[error("System identifier must not be empty")]
    EmptySystemId,

    /// Error during JSON deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error (reading override files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ExplorerError
pub type ExplorerResult<T> = Result<T, ExplorerError>;
