//! Property-based tests for translation lookups and selection
//!
//! Uses proptest to check the lookup, fallback and transition laws.

use std::collections::HashMap;

use anatomy_core::{
    Direction, Language, LanguageState, PhaseCycle, Selection, SystemCatalog, SystemId,
    TranslationTable, AnimationKind,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn language_strategy() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::English), Just(Language::Arabic)]
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{1,24}").expect("valid regex")
}

/// Two tables with the same key set and arbitrary values
fn table_strategy() -> impl Strategy<Value = (HashMap<String, String>, HashMap<String, String>)> {
    prop::collection::hash_map(key_strategy(), (".{0,40}", ".{0,40}"), 0..30).prop_map(|map| {
        let mut en = HashMap::new();
        let mut ar = HashMap::new();
        for (key, (a, b)) in map {
            en.insert(key.clone(), a);
            ar.insert(key, b);
        }
        (en, ar)
    })
}

fn build_table(en: &HashMap<String, String>, ar: &HashMap<String, String>) -> TranslationTable {
    let json = serde_json::json!({ "en": en, "ar": ar }).to_string();
    TranslationTable::from_json(&json).expect("generated table parses")
}

/// Operations the UI can perform on the selection
#[derive(Debug, Clone)]
enum SelectionOp {
    Select(String),
    Close,
}

fn selection_ops_strategy() -> impl Strategy<Value = Vec<SelectionOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(vec!["skeleton", "nervous", "heart", "digestive", "respiratory", "cell"])
                .prop_map(|id| SelectionOp::Select(id.to_string())),
            1 => Just(SelectionOp::Close),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Present keys resolve to exactly the stored string
    #[test]
    fn present_keys_resolve_literally((en, ar) in table_strategy()) {
        let table = build_table(&en, &ar);
        for (key, value) in &en {
            prop_assert_eq!(table.resolve(Language::English, key), value.as_str());
        }
        for (key, value) in &ar {
            prop_assert_eq!(table.resolve(Language::Arabic, key), value.as_str());
        }
    }

    /// Absent keys resolve to themselves
    #[test]
    fn absent_keys_fall_back_to_key(
        (en, ar) in table_strategy(),
        language in language_strategy(),
        key in "[A-Z0-9]{1,16}",
    ) {
        // Generated table keys are lowercase, so this key is never present
        let table = build_table(&en, &ar);
        prop_assert_eq!(table.resolve(language, &key), key.as_str());
    }

    /// Direction is right-to-left exactly for the secondary language
    #[test]
    fn direction_is_rtl_iff_arabic(language in language_strategy()) {
        let state = LanguageState::new(language);
        prop_assert_eq!(state.direction() == Direction::Rtl, language == Language::Arabic);
    }

    /// The selection is always the result of the last operation
    #[test]
    fn selection_tracks_last_operation(ops in selection_ops_strategy()) {
        let mut selection = Selection::default();
        let mut expected: Option<String> = None;
        for op in ops {
            match op {
                SelectionOp::Select(id) => {
                    selection.select(id.as_str());
                    expected = Some(id);
                }
                SelectionOp::Close => {
                    selection.close();
                    expected = None;
                }
            }
            prop_assert_eq!(selection.active().map(SystemId::as_str), expected.as_deref());
        }
    }

    /// Closing any number of times from Closed stays Closed
    #[test]
    fn close_is_idempotent(times in 1usize..10) {
        let mut selection = Selection::default();
        for _ in 0..times {
            selection.close();
            prop_assert_eq!(&selection, &Selection::Closed);
        }
    }

    /// A phase cycle returns to its start after one full lap
    #[test]
    fn phase_cycle_wraps(
        kind in prop_oneof![
            Just(AnimationKind::Heartbeat),
            Just(AnimationKind::Breathing),
            Just(AnimationKind::ActionPotential),
        ],
        laps in 1usize..5,
    ) {
        let mut cycle = PhaseCycle::new(kind);
        let start = cycle.current();
        for _ in 0..(kind.phases().len() * laps) {
            cycle.advance();
        }
        prop_assert_eq!(cycle.current(), start);
    }
}

/// No two catalog entries share an identifier
#[test]
fn builtin_catalog_ids_are_unique() {
    let catalog = SystemCatalog::builtin().unwrap();
    let mut ids: Vec<&str> = catalog.ids().map(SystemId::as_str).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
