//! Explorer context for Human Biology Explorer.
//!
//! The root component owns a single `Signal<Explorer>`; views read
//! resolved strings from it and change state only through its named
//! operations (`select`, `close`, `toggle_language`).
//!
//! ## Usage
//!
//! ```ignore
//! let mut explorer = use_explorer();
//!
//! // Read
//! let header = explorer.read().header();
//!
//! // Mutate
//! explorer.write().select("heart");
//! ```

use dioxus::prelude::*;

use anatomy_core::{Explorer, Language};

use crate::direction::WebviewDocument;

/// Hook to access the explorer state from context.
pub fn use_explorer() -> Signal<Explorer> {
    use_context::<Signal<Explorer>>()
}

/// Switch to the other language and update the webview's `dir`/`lang`.
pub fn toggle_language(mut explorer: Signal<Explorer>) -> Language {
    explorer.write().toggle_language(&mut WebviewDocument)
}

/// Open the detail panel for `id`.
pub fn select_system(mut explorer: Signal<Explorer>, id: &str) {
    explorer.write().select(id);
}

/// Close the detail panel (no-op when closed).
pub fn close_panel(mut explorer: Signal<Explorer>) {
    explorer.write().close();
}
