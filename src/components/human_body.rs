//! Clickable body diagram.
//!
//! Four regions map onto catalog systems, labelled beside the figure. A
//! region whose system is not in the catalog is not drawn.

use anatomy_ui::accent_class;
use dioxus::prelude::*;

use crate::context::{select_system, use_explorer};

/// A clickable area of the figure.
struct Region {
    system: &'static str,
    shape: Shape,
    /// Label anchor, to the side of the figure
    label_at: (i32, i32),
}

enum Shape {
    Ellipse { cx: u32, cy: u32, rx: u32, ry: u32 },
    Rect { x: u32, y: u32, width: u32, height: u32 },
}

static REGIONS: [Region; 4] = [
    Region {
        system: "nervous",
        label_at: (212, 40),
        shape: Shape::Ellipse { cx: 100, cy: 60, rx: 38, ry: 44 },
    },
    Region {
        system: "heart",
        label_at: (212, 170),
        shape: Shape::Ellipse { cx: 112, cy: 170, rx: 22, ry: 24 },
    },
    Region {
        system: "digestive",
        label_at: (-12, 265),
        shape: Shape::Rect { x: 72, y: 215, width: 56, height: 95 },
    },
    Region {
        system: "skeleton",
        label_at: (212, 450),
        shape: Shape::Rect { x: 70, y: 330, width: 60, height: 240 },
    },
];

#[component]
pub fn HumanBody() -> Element {
    let explorer = use_explorer();

    let (hint, regions) = {
        let state = explorer.read();
        let cards = state.overview();
        let regions: Vec<(&'static Region, String, String, bool)> = REGIONS
            .iter()
            .filter_map(|region| {
                cards
                    .iter()
                    .find(|card| card.id.as_str() == region.system)
                    .map(|card| {
                        (region, card.short_label.clone(), card.accent.clone(), card.active)
                    })
            })
            .collect();
        (state.header().hint, regions)
    };

    rsx! {
        section { class: "body-figure",
            svg {
                class: "body-svg",
                view_box: "-50 0 300 600",
                role: "img",

                // Silhouette
                g { class: "silhouette",
                    ellipse { cx: "100", cy: "60", rx: "40", ry: "46" }
                    rect { x: "90", y: "104", width: "20", height: "20" }
                    rect { x: "60", y: "122", width: "80", height: "200", rx: "30" }
                    rect { x: "28", y: "130", width: "26", height: "190", rx: "13" }
                    rect { x: "146", y: "130", width: "26", height: "190", rx: "13" }
                    rect { x: "68", y: "318", width: "28", height: "260", rx: "14" }
                    rect { x: "104", y: "318", width: "28", height: "260", rx: "14" }
                }

                for (region, label, accent, active) in regions {
                    BodyRegion {
                        key: "{region.system}",
                        system: region.system,
                        label: label,
                        accent: accent,
                        active: active,
                        shape: region_shape(region),
                        label_x: region.label_at.0,
                        label_y: region.label_at.1,
                        onselect: move |id: &'static str| select_system(explorer, id),
                    }
                }
            }

            p { class: "body-hint", "{hint}" }
        }
    }
}

/// Enter and Space activate a focused region.
fn activates(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

fn region_shape(region: &Region) -> Element {
    match region.shape {
        Shape::Ellipse { cx, cy, rx, ry } => rsx! {
            ellipse { cx: "{cx}", cy: "{cy}", rx: "{rx}", ry: "{ry}" }
        },
        Shape::Rect { x, y, width, height } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{width}", height: "{height}", rx: "12" }
        },
    }
}

#[component]
fn BodyRegion(
    system: &'static str,
    label: String,
    accent: String,
    active: bool,
    shape: Element,
    label_x: i32,
    label_y: i32,
    onselect: EventHandler<&'static str>,
) -> Element {
    let mut class = format!("body-region {}", accent_class(&accent));
    if active {
        class.push_str(" active");
    }

    rsx! {
        g {
            class: "{class}",
            role: "button",
            tabindex: "0",
            "aria-label": "{label}",
            onclick: move |_| onselect.call(system),
            onkeydown: move |evt: KeyboardEvent| {
                if activates(&evt.key()) {
                    evt.prevent_default();
                    onselect.call(system);
                }
            },
            {shape}
            text {
                class: "region-label",
                x: "{label_x}",
                y: "{label_y}",
                text_anchor: "middle",
                "{label}"
            }
        }
    }
}
