//! Selection state: which system's detail panel is open.
//!
//! ```text
//! Closed --select(id)--> Open(id) --select(other)--> Open(other)
//!    ^                      |
//!    +-------close()--------+         close() on Closed is a no-op
//! ```

use crate::catalog::SystemId;

/// At most one system is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// No panel shown
    #[default]
    Closed,
    /// Panel shown for this system
    Open(SystemId),
}

impl Selection {
    /// Open (or switch) the panel to `id`, returning the previous state.
    pub fn select(&mut self, id: impl Into<SystemId>) -> Selection {
        std::mem::replace(self, Selection::Open(id.into()))
    }

    /// Close the panel, returning the previous state.
    pub fn close(&mut self) -> Selection {
        std::mem::take(self)
    }

    pub fn active(&self) -> Option<&SystemId> {
        match self {
            Selection::Closed => None,
            Selection::Open(id) => Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// True when `id` is the open system.
    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|active| active.as_str() == id)
    }
}
