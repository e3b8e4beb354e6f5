//! Looping step-through of a system's phases (heartbeat, breathing,
//! action potential).

use std::time::Duration;

use anatomy_core::{AnimationKind, PhaseCycle};
use dioxus::prelude::*;

use super::animation_class;
use crate::context::use_explorer;

#[component]
pub fn PhaseCycleView(kind: AnimationKind) -> Element {
    let explorer = use_explorer();
    let mut cycle = use_signal(|| PhaseCycle::new(kind));

    // Restarted by the parent through `key` when the system changes
    use_future(move || async move {
        loop {
            let interval: Duration = cycle.peek().kind().step_interval();
            tokio::time::sleep(interval).await;
            cycle.write().advance();
        }
    });

    let active = cycle.read().index();
    let (title, steps) = {
        let state = explorer.read();
        let steps: Vec<(String, String)> = kind
            .phases()
            .iter()
            .map(|phase| {
                (
                    state.t(phase.title_key).to_string(),
                    state.t(phase.description_key).to_string(),
                )
            })
            .collect();
        (state.t(kind.title_key()).to_string(), steps)
    };
    let class = format!("phase-cycle {}", animation_class(kind));

    rsx! {
        div { class: "{class}",
            h4 { class: "phase-title", "{title}" }
            ol { class: "phase-steps",
                for (i, (name, description)) in steps.into_iter().enumerate() {
                    li {
                        key: "{i}",
                        class: if i == active { "phase-step active" } else { "phase-step" },
                        span { class: "phase-marker", "{i + 1}" }
                        div {
                            strong { "{name}" }
                            if !description.is_empty() && description != name {
                                p { "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
