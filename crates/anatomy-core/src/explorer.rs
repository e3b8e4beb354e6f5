//! The root context owning language and selection state.
//!
//! Views never mutate state directly; they call the named operations
//! here. Render models ([`PanelView`], [`OverviewCard`], [`HeaderView`])
//! are rebuilt on every call so a language switch is reflected at once.
//!
//! ## Usage
//!
//! ```
//! use anatomy_core::{Explorer, Language, RecordingDocument};
//!
//! let mut explorer = Explorer::builtin().unwrap();
//! let mut document = RecordingDocument::default();
//!
//! explorer.select("skeleton");
//! assert_eq!(explorer.panel().unwrap().title, "Skeletal System");
//!
//! explorer.set_language(Language::Arabic, &mut document);
//! assert_eq!(explorer.panel().unwrap().title, "الجهاز الهيكلي");
//!
//! explorer.close();
//! assert!(explorer.panel().is_none());
//! ```

use std::sync::Arc;

use crate::animation::AnimationKind;
use crate::catalog::{SystemCatalog, SystemId};
use crate::error::ExplorerResult;
use crate::i18n::{Direction, DocumentSink, Language, LanguageState, TranslationTable};
use crate::selection::Selection;

/// Explorer state: current language, current selection and the shared
/// immutable content they are resolved against.
#[derive(Debug, Clone)]
pub struct Explorer {
    language: LanguageState,
    selection: Selection,
    translations: Arc<TranslationTable>,
    catalog: Arc<SystemCatalog>,
}

impl PartialEq for Explorer {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.selection == other.selection
            && Arc::ptr_eq(&self.translations, &other.translations)
            && Arc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl Default for Explorer {
    /// Empty content: no systems, every string shown as its key.
    fn default() -> Self {
        Self::new(
            Arc::new(TranslationTable::default()),
            Arc::new(SystemCatalog::default()),
            Language::default(),
        )
    }
}

impl Explorer {
    /// Start closed, in `language`.
    pub fn new(
        translations: Arc<TranslationTable>,
        catalog: Arc<SystemCatalog>,
        language: Language,
    ) -> Self {
        Self {
            language: LanguageState::new(language),
            selection: Selection::Closed,
            translations,
            catalog,
        }
    }

    /// Explorer over the embedded content, in the primary language.
    pub fn builtin() -> ExplorerResult<Self> {
        Ok(Self::new(
            Arc::new(TranslationTable::builtin()?),
            Arc::new(SystemCatalog::builtin()?),
            Language::default(),
        ))
    }

    // === Language ===

    pub fn language(&self) -> Language {
        self.language.current()
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Switch language and push `dir`/`lang` to the document.
    ///
    /// The selection is left untouched.
    pub fn set_language(&mut self, language: Language, document: &mut dyn DocumentSink) {
        let previous = self.language.set(language);
        if previous != language {
            tracing::info!(from = %previous, to = %language, "language changed");
        }
        self.apply_document(document);
    }

    /// Switch to the other language. Returns the new language.
    pub fn toggle_language(&mut self, document: &mut dyn DocumentSink) -> Language {
        let next = self.language().toggled();
        self.set_language(next, document);
        next
    }

    /// Write the current direction and language tag to `document`.
    pub fn apply_document(&self, document: &mut dyn DocumentSink) {
        let language = self.language();
        document.apply(language.direction(), language.code());
    }

    /// Resolve `key` in the current language (raw key when missing).
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.resolve(self.language(), key)
    }

    // === Selection ===

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Open the panel for `id`, replacing any open panel.
    pub fn select(&mut self, id: impl Into<SystemId>) {
        let id = id.into();
        if !self.catalog.contains(id.as_str()) {
            tracing::debug!(system = %id, "selected system is not in the catalog");
        }
        let previous = self.selection.select(id);
        tracing::debug!(?previous, current = ?self.selection, "selection changed");
    }

    /// Close the panel. No-op when already closed.
    pub fn close(&mut self) {
        if self.selection.close().is_open() {
            tracing::debug!("panel closed");
        }
    }

    // === Content ===

    pub fn catalog(&self) -> &SystemCatalog {
        &self.catalog
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// Resolved detail panel for the open system.
    ///
    /// `None` when closed or when the open id has no catalog entry.
    pub fn panel(&self) -> Option<PanelView> {
        let id = self.selection.active()?;
        let entry = self.catalog.lookup(id.as_str())?;

        let cells = entry
            .cell_types
            .iter()
            .map(|cell| PanelCell {
                name: self.t(&cell.name_key).to_string(),
                description: self.t(&cell.description_key).to_string(),
            })
            .collect();

        let sections = entry
            .extra_sections
            .iter()
            .map(|section| PanelSection {
                title: self.t(&section.title_key).to_string(),
                show_item_names: section.items.len() > 1,
                items: section
                    .items
                    .iter()
                    .map(|item| PanelCell {
                        name: self.t(&item.name_key).to_string(),
                        description: self.t(&item.description_key).to_string(),
                    })
                    .collect(),
            })
            .collect();

        Some(PanelView {
            id: entry.id.clone(),
            title: self.t(&entry.title_key).to_string(),
            description: self.t(&entry.description_key).to_string(),
            facts: entry.facts_key.as_deref().map(|key| self.t(key).to_string()),
            image: entry.image.clone(),
            secondary_image: entry.secondary_image.clone(),
            icon: entry.icon.clone(),
            accent: entry.accent.clone(),
            cell_types_heading: self.t("cell_types").to_string(),
            cells,
            sections,
            animation: entry.animation,
            close_label: self.t("close").to_string(),
            direction: self.direction(),
        })
    }

    /// One resolved card per catalog entry, in catalog order.
    pub fn overview(&self) -> Vec<OverviewCard> {
        self.catalog
            .iter()
            .map(|entry| OverviewCard {
                id: entry.id.clone(),
                title: self.t(&entry.title_key).to_string(),
                short_label: self
                    .t(entry.short_key.as_deref().unwrap_or(entry.title_key.as_str()))
                    .to_string(),
                description: self.t(&entry.description_key).to_string(),
                facts: entry.facts_key.as_deref().map(|key| self.t(key).to_string()),
                image: entry.image.clone(),
                icon: entry.icon.clone(),
                accent: entry.accent.clone(),
                active: self.selection.is_active(entry.id.as_str()),
            })
            .collect()
    }

    /// Resolved header strings.
    pub fn header(&self) -> HeaderView {
        HeaderView {
            title: self.t("title").to_string(),
            subtitle: self.t("subtitle").to_string(),
            // The toggle shows the name of the language it switches to
            toggle_label: self.t("language").to_string(),
            hint: self.t("click_to_explore").to_string(),
            systems_heading: self.t("systems").to_string(),
        }
    }
}

/// A name/description pair as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelCell {
    pub name: String,
    pub description: String,
}

/// An extra section as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    pub title: String,
    pub items: Vec<PanelCell>,
    /// Single-item sections show only the description.
    pub show_item_names: bool,
}

/// Everything the detail panel shows, already translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub id: SystemId,
    pub title: String,
    pub description: String,
    pub facts: Option<String>,
    pub image: String,
    pub secondary_image: Option<String>,
    pub icon: String,
    pub accent: String,
    pub cell_types_heading: String,
    pub cells: Vec<PanelCell>,
    pub sections: Vec<PanelSection>,
    pub animation: Option<AnimationKind>,
    pub close_label: String,
    pub direction: Direction,
}

/// A selectable entry of the overview, already translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewCard {
    pub id: SystemId,
    pub title: String,
    pub short_label: String,
    pub description: String,
    pub facts: Option<String>,
    pub image: String,
    pub icon: String,
    pub accent: String,
    pub active: bool,
}

/// Header strings, already translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
    pub toggle_label: String,
    pub hint: String,
    pub systems_heading: String,
}
