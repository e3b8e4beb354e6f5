//! Language switch button.
//!
//! Shows the name of the language it switches to ("العربية" while in
//! English, "English" while in Arabic).

use anatomy_ui::Button;
use dioxus::prelude::*;

use crate::context::{toggle_language, use_explorer};

#[component]
pub fn LanguageToggle(label: String) -> Element {
    let explorer = use_explorer();

    rsx! {
        Button {
            aria_label: "Toggle language".to_string(),
            onclick: move |_| {
                let language = toggle_language(explorer);
                tracing::debug!("Language toggled to {}", language);
            },
            span { class: "globe", "\u{1F310}" }
            span { "{label}" }
        }
    }
}
