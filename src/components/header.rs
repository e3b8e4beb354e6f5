//! App header with title and language switch.

use dioxus::prelude::*;

use super::LanguageToggle;
use crate::context::use_explorer;

#[component]
pub fn Header() -> Element {
    let explorer = use_explorer();
    let header = explorer.read().header();

    rsx! {
        header { class: "app-header",
            div { class: "brand",
                div { class: "brand-mark", "\u{2695}" }
                div {
                    h1 { class: "app-title", "{header.title}" }
                    p { class: "app-subtitle", "{header.subtitle}" }
                }
            }

            LanguageToggle { label: header.toggle_label.clone() }
        }
    }
}
