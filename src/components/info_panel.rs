//! Detail panel for the selected system.
//!
//! Slides in from the inline-end edge (right in LTR, left in RTL). Closes
//! on the close button or a click on the backdrop.

use anatomy_core::PanelView;
use anatomy_ui::{accent_class, CloseButton, ItemCard, SectionHeading};
use dioxus::prelude::*;

use super::{asset_src, icon_glyph, PhaseCycleView};
use crate::context::{close_panel, use_explorer};

#[component]
pub fn InfoPanel() -> Element {
    let explorer = use_explorer();

    let Some(panel) = explorer.read().panel() else {
        return rsx! {};
    };
    let class = format!("info-panel {}", accent_class(&panel.accent));

    rsx! {
        div {
            class: "panel-backdrop",
            onclick: move |_| close_panel(explorer),
        }
        aside {
            class: "{class}",
            dir: "{panel.direction}",
            role: "dialog",
            "aria-label": "{panel.title}",
            PanelHeader {
                title: panel.title.clone(),
                icon: panel.icon.clone(),
                close_label: panel.close_label.clone(),
                onclose: move |_| close_panel(explorer),
            }
            PanelBody { panel: panel.clone() }
        }
    }
}

#[component]
fn PanelHeader(title: String, icon: String, close_label: String, onclose: EventHandler<()>) -> Element {
    let glyph = icon_glyph(&icon);

    rsx! {
        header { class: "panel-header",
            span { class: "panel-icon", "{glyph}" }
            h2 { class: "panel-title", "{title}" }
            CloseButton { label: close_label, onclick: onclose }
        }
    }
}

#[component]
fn PanelBody(panel: PanelView) -> Element {
    let image = asset_src(&panel.image);
    let secondary = panel.secondary_image.as_deref().map(asset_src);
    let accent = panel.accent.clone();

    rsx! {
        div { class: "panel-body",
            figure { class: "panel-media",
                img { src: "{image}", alt: "{panel.title}" }
                if let Some(src) = secondary {
                    img { class: "panel-media-secondary", src: "{src}", alt: "" }
                }
            }

            p { class: "panel-description", "{panel.description}" }

            if let Some(facts) = &panel.facts {
                div { class: "panel-facts", "{facts}" }
            }

            if !panel.cells.is_empty() {
                section { class: "panel-section",
                    SectionHeading { title: panel.cell_types_heading.clone(), accent: accent.clone() }
                    div { class: "item-grid",
                        for cell in panel.cells.iter() {
                            ItemCard {
                                key: "{cell.name}",
                                name: cell.name.clone(),
                                description: cell.description.clone(),
                                accent: accent.clone(),
                            }
                        }
                    }
                }
            }

            for section in panel.sections.iter() {
                section { key: "{section.title}", class: "panel-section",
                    SectionHeading { title: section.title.clone(), accent: accent.clone() }
                    div { class: "item-grid",
                        for item in section.items.iter() {
                            ItemCard {
                                key: "{item.name}",
                                name: item.name.clone(),
                                description: item.description.clone(),
                                show_name: section.show_item_names,
                                accent: accent.clone(),
                                muted: true,
                            }
                        }
                    }
                }
            }

            if let Some(kind) = panel.animation {
                PhaseCycleView { key: "{panel.id}", kind }
            }
        }
    }
}
