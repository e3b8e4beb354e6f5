use dioxus::prelude::*;

use anatomy_core::Explorer;

use crate::direction::WebviewDocument;
use crate::pages::{Home, SystemView};
use crate::theme::{colors, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Body diagram and system overview
/// - `/systems/:id` - Same view with the panel for `id` already open
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/systems/:id")]
    SystemView { id: String },
}

/// Root application component.
///
/// Owns the explorer state and shares it with every view through context.
#[component]
pub fn App() -> Element {
    let explorer: Signal<Explorer> = use_signal(crate::initial_explorer);
    use_context_provider(|| explorer);

    // Push the starting dir/lang once; later changes go through set_language
    use_effect(move || {
        explorer.peek().apply_document(&mut WebviewDocument);
    });

    // Accent classes for whatever tokens the loaded catalog uses
    let palette = use_hook(|| {
        let state = explorer.peek();
        colors::palette_css(state.catalog().iter().map(|entry| entry.accent.as_str()))
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {palette} }
        Router::<Route> {}
    }
}
