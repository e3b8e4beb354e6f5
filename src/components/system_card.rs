//! A single overview card.

use anatomy_core::OverviewCard;
use anatomy_ui::accent_class;
use dioxus::prelude::*;

use super::{asset_src, icon_glyph};
use crate::context::{select_system, use_explorer};

#[component]
pub fn SystemCard(card: OverviewCard) -> Element {
    let explorer = use_explorer();

    let mut class = format!("system-card {}", accent_class(&card.accent));
    if card.active {
        class.push_str(" active");
    }
    let image = asset_src(&card.image);
    let glyph = icon_glyph(&card.icon);
    let id = card.id.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| select_system(explorer, id.as_str()),

            div { class: "card-media",
                img { src: "{image}", alt: "{card.title}" }
                span { class: "card-icon", "{glyph}" }
            }
            div { class: "card-accent" }
            div { class: "card-body",
                h3 { class: "card-title", "{card.title}" }
                p { class: "card-description", "{card.description}" }
                if let Some(facts) = &card.facts {
                    p { class: "card-facts", "{facts}" }
                }
            }
            span { class: "card-chevron", "\u{203A}" }
        }
    }
}
