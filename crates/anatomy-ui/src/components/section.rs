//! Section Components
//!
//! Headings and cards used inside the detail panel.

use dioxus::prelude::*;

/// CSS class carrying an accent colour (`accent-heart`, ...).
///
/// Unknown or empty tokens fall back to the neutral `accent-default`.
pub fn accent_class(accent: &str) -> String {
    let token = accent.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        "accent-default".to_string()
    } else {
        format!("accent-{}", token)
    }
}

/// Section heading preceded by a small accent-coloured dot.
#[component]
pub fn SectionHeading(title: String, accent: String) -> Element {
    let dot_class = format!("accent-dot {}", accent_class(&accent));

    rsx! {
        h3 { class: "section-heading",
            span { class: "{dot_class}" }
            "{title}"
        }
    }
}

/// Properties for the ItemCard component
#[derive(Clone, PartialEq, Props)]
pub struct ItemCardProps {
    /// Item name; hidden when `show_name` is false
    pub name: String,
    pub description: String,
    #[props(default = true)]
    pub show_name: bool,
    /// Accent token for the hover border
    #[props(default)]
    pub accent: String,
    /// Muted background (extra sections) instead of card background
    #[props(default = false)]
    pub muted: bool,
}

/// A name + description card.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ItemCard {
///         name: "Osteocytes".to_string(),
///         description: "Mature bone cells ...".to_string(),
///         accent: "skeleton".to_string(),
///     }
/// }
/// ```
#[component]
pub fn ItemCard(props: ItemCardProps) -> Element {
    let base = if props.muted { "item-card muted" } else { "item-card" };
    let class = format!("{} {}", base, accent_class(&props.accent));

    rsx! {
        div { class: "{class}",
            if props.show_name {
                h4 { class: "item-name", "{props.name}" }
            }
            p { class: "item-description", "{props.description}" }
        }
    }
}
