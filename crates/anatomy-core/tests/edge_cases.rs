//! Edge case and boundary condition tests
//!
//! Content loading from disk, degenerate keys and identifiers, and
//! catalogs whose shape differs from the built-in one.

use std::io::Write;
use std::sync::Arc;

use anatomy_core::{
    CoverageReport, Explorer, ExplorerError, Language, SystemCatalog, TranslationTable,
};
use tempfile::NamedTempFile;

// ============================================================================
// Test Utilities
// ============================================================================

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const FOUR_SYSTEMS: &str = r#"{"systems": [
    {"id": "nervous", "title_key": "nervous", "description_key": "nervous_desc", "image": "neuron-system.png"},
    {"id": "heart", "title_key": "heart", "description_key": "heart_desc", "image": "heart-system.png"},
    {"id": "digestive", "title_key": "digestive", "description_key": "digestive_desc", "image": "digestive-system.png"},
    {"id": "skeleton", "title_key": "skeleton", "description_key": "skeleton_desc", "image": "skeleton-system.png"}
]}"#;

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_translation_table_from_path() {
    let file = write_temp(r#"{"en": {"close": "Close"}, "ar": {"close": "إغلاق"}}"#);
    let table = TranslationTable::from_path(file.path()).unwrap();
    assert_eq!(table.resolve(Language::Arabic, "close"), "إغلاق");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SystemCatalog::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ExplorerError::Io(_)));
}

#[test]
fn test_catalog_missing_required_field_is_json_error() {
    let err = SystemCatalog::from_json(r#"{"systems": [{"id": "heart"}]}"#).unwrap_err();
    assert!(matches!(err, ExplorerError::Json(_)));
}

/// A smaller catalog with the minimal record shape works unchanged
#[test]
fn test_four_system_catalog() {
    let file = write_temp(FOUR_SYSTEMS);
    let catalog = SystemCatalog::from_path(file.path()).unwrap();
    let translations = TranslationTable::builtin().unwrap();
    assert_eq!(catalog.len(), 4);
    assert!(CoverageReport::check(&translations, &catalog).is_clean());

    let mut explorer = Explorer::new(Arc::new(translations), Arc::new(catalog), Language::Arabic);
    explorer.select("heart");
    let panel = explorer.panel().unwrap();
    assert!(panel.cells.is_empty());
    assert!(panel.sections.is_empty());
    assert!(panel.facts.is_none());

    explorer.select("respiratory");
    assert!(explorer.panel().is_none());
}

// ============================================================================
// Degenerate Keys
// ============================================================================

#[test]
fn test_empty_key_resolves_to_empty() {
    let table = TranslationTable::builtin().unwrap();
    assert_eq!(table.resolve(Language::English, ""), "");
}

#[test]
fn test_key_lookup_is_case_sensitive() {
    let table = TranslationTable::builtin().unwrap();
    assert_eq!(table.resolve(Language::English, "Close"), "Close");
    assert_eq!(table.resolve(Language::English, "CLOSE"), "CLOSE");
    assert_eq!(table.resolve(Language::Arabic, "close"), "إغلاق");
}

/// Keys missing from the table show up raw inside a rendered panel
#[test]
fn test_panel_shows_raw_keys_for_missing_translations() {
    let translations = TranslationTable::from_json(
        r#"{"en": {"heart": "Heart"}, "ar": {"heart": "القلب"}}"#,
    )
    .unwrap();
    let catalog = SystemCatalog::from_json(FOUR_SYSTEMS).unwrap();
    let mut explorer = Explorer::new(Arc::new(translations), Arc::new(catalog), Language::English);

    explorer.select("heart");
    let panel = explorer.panel().unwrap();
    assert_eq!(panel.title, "Heart");
    assert_eq!(panel.description, "heart_desc");
    assert_eq!(panel.close_label, "close");
}

// ============================================================================
// Empty Catalog
// ============================================================================

#[test]
fn test_empty_catalog() {
    let catalog = SystemCatalog::from_json(r#"{"systems": []}"#).unwrap();
    assert!(catalog.is_empty());

    let mut explorer = Explorer::new(
        Arc::new(TranslationTable::builtin().unwrap()),
        Arc::new(catalog),
        Language::English,
    );
    assert!(explorer.overview().is_empty());
    explorer.select("heart");
    assert!(explorer.panel().is_none());
}
