//! System view - direct link to a system's detail panel.

use dioxus::prelude::*;

use super::Home;
use crate::context::{select_system, use_explorer};

/// Opens the panel for `id`, then renders the home page.
///
/// Unknown ids leave the selection open on a missing entry, which renders
/// as no panel.
#[component]
pub fn SystemView(id: String) -> Element {
    let explorer = use_explorer();

    use_effect(use_reactive!(|(id,)| {
        tracing::info!("Opening system from route: {}", id);
        select_system(explorer, &id);
    }));

    rsx! {
        Home {}
    }
}
