//! Home page - body diagram, system overview and detail panel.

use dioxus::prelude::*;

use crate::components::{Header, HumanBody, InfoPanel, SystemGrid};
use crate::context::use_explorer;

/// Home page component.
///
/// The main column shifts aside while the detail panel is open.
#[component]
pub fn Home() -> Element {
    let explorer = use_explorer();
    let (dir, lang, panel_open) = {
        let state = explorer.read();
        (
            state.direction().as_attr(),
            state.language().code(),
            state.selection().is_open(),
        )
    };

    rsx! {
        div { class: "app-shell", dir: "{dir}", lang: "{lang}",
            Header {}

            main { class: if panel_open { "explorer-main panel-open" } else { "explorer-main" },
                div { class: "explorer-layout",
                    HumanBody {}
                    SystemGrid {}
                }
            }

            InfoPanel {}
        }
    }
}
