//! System catalog: static per-system display metadata.
//!
//! Entries are records with optional fields so new systems (or new
//! attributes such as a second image or an animation) need no special
//! casing. The catalog is built once and never mutated.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationKind;
use crate::error::{ExplorerError, ExplorerResult};

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Stable identifier of an anatomical system (e.g. `"heart"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(String);

impl SystemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SystemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SystemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A cell type found in a system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellType {
    pub name_key: String,
    pub description_key: String,
}

/// One named item of an [`ExtraSection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionItem {
    pub name_key: String,
    pub description_key: String,
}

/// Additional titled section of a system panel (organs, structures, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraSection {
    pub title_key: String,
    pub items: Vec<SectionItem>,
}

/// Display metadata for one anatomical system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemEntry {
    pub id: SystemId,
    pub title_key: String,
    /// Short label for the body diagram
    #[serde(default)]
    pub short_key: Option<String>,
    pub description_key: String,
    #[serde(default)]
    pub facts_key: Option<String>,
    /// Opaque image asset handle
    pub image: String,
    #[serde(default)]
    pub secondary_image: Option<String>,
    /// Opaque glyph name, mapped to an icon by the UI
    #[serde(default)]
    pub icon: String,
    /// Accent token used for colouring (e.g. `"heart"`)
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub cell_types: Vec<CellType>,
    #[serde(default)]
    pub extra_sections: Vec<ExtraSection>,
    #[serde(default)]
    pub animation: Option<AnimationKind>,
}

impl SystemEntry {
    /// Every translation key this entry references, in display order.
    pub fn referenced_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.title_key.as_str()];
        keys.extend(self.short_key.as_deref());
        keys.push(self.description_key.as_str());
        keys.extend(self.facts_key.as_deref());
        for cell in &self.cell_types {
            keys.push(&cell.name_key);
            keys.push(&cell.description_key);
        }
        for section in &self.extra_sections {
            keys.push(&section.title_key);
            for item in &section.items {
                keys.push(&item.name_key);
                keys.push(&item.description_key);
            }
        }
        if let Some(kind) = self.animation {
            for key in kind.keys() {
                keys.push(key);
            }
        }
        keys
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    systems: Vec<SystemEntry>,
}

/// Read-only collection of [`SystemEntry`] records keyed by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemCatalog {
    entries: Vec<SystemEntry>,
    index: HashMap<String, usize>,
}

impl SystemCatalog {
    /// Build a catalog, keeping entry order.
    ///
    /// Fails on an empty or repeated identifier.
    pub fn new(entries: Vec<SystemEntry>) -> ExplorerResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.as_str().trim().is_empty() {
                return Err(ExplorerError::EmptySystemId);
            }
            if index.insert(entry.id.to_string(), position).is_some() {
                return Err(ExplorerError::DuplicateSystem(entry.id.to_string()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Parse a `{ "systems": [ ... ] }` document.
    pub fn from_json(json: &str) -> ExplorerResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.systems)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The six embedded systems.
    pub fn builtin() -> ExplorerResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Find an entry. Absence is a normal outcome for callers to handle.
    pub fn lookup(&self, id: &str) -> Option<&SystemEntry> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &SystemEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SystemId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every `(system, key)` pair referenced by the catalog.
    pub fn referenced_keys(&self) -> Vec<(&SystemId, &str)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .referenced_keys()
                    .into_iter()
                    .map(move |key| (&entry.id, key))
            })
            .collect()
    }
}
