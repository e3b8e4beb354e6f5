//! Overview grid of every catalog system.

use dioxus::prelude::*;

use super::SystemCard;
use crate::context::use_explorer;

#[component]
pub fn SystemGrid() -> Element {
    let explorer = use_explorer();
    let (heading, cards) = {
        let state = explorer.read();
        (state.header().systems_heading, state.overview())
    };

    rsx! {
        section { class: "system-overview",
            h2 { class: "overview-heading", "{heading}" }
            div { class: "system-grid",
                for card in cards {
                    SystemCard { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}
