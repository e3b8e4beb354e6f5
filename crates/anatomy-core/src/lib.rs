//! Anatomy Explorer Core Library
//!
//! Localization and selection state behind the anatomy explorer UI.
//!
//! ## Overview
//!
//! The explorer shows a set of anatomical systems (skeletal, nervous,
//! cardiovascular, digestive, respiratory, cellular). Picking one opens a
//! detail panel whose text is resolved through a bilingual translation
//! table (English left-to-right, Arabic right-to-left).
//!
//! ## Building Blocks
//!
//! - **Translation Store**: immutable `(language, key) -> string` table with
//!   fallback-to-key lookups
//! - **System Catalog**: immutable per-system metadata, keyed by identifier
//! - **Selection**: `Closed` or `Open(id)`, changed only by `select` / `close`
//! - **Explorer**: the root context owning both state machines
//!
//! ## Quick Start
//!
//! ```
//! use anatomy_core::{Explorer, Language, RecordingDocument};
//!
//! let mut explorer = Explorer::builtin().unwrap();
//! explorer.select("heart");
//! assert_eq!(explorer.panel().unwrap().title, "Cardiovascular System");
//!
//! let mut document = RecordingDocument::default();
//! explorer.set_language(Language::Arabic, &mut document);
//! assert!(explorer.direction().is_rtl());
//! ```

pub mod animation;
pub mod catalog;
pub mod error;
pub mod explorer;
pub mod i18n;
pub mod logging;
pub mod selection;
pub mod validate;

// Re-exports
pub use animation::{AnimationKind, Phase, PhaseCycle};
pub use catalog::{CellType, ExtraSection, SectionItem, SystemCatalog, SystemEntry, SystemId};
pub use error::{ExplorerError, ExplorerResult};
pub use explorer::{
    Explorer, HeaderView, OverviewCard, PanelCell, PanelSection, PanelView,
};
pub use i18n::{
    Direction, DocumentSink, Language, LanguageState, RecordingDocument, TranslationTable,
};
pub use selection::Selection;
pub use validate::{CoverageIssue, CoverageReport};
