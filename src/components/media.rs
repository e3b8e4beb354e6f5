//! Icon and image handles.
//!
//! Catalog entries carry opaque icon names and image file names; this is
//! where they become glyphs and asset paths.

use anatomy_core::AnimationKind;

/// Directory the desktop bundle serves images from.
const ASSET_DIR: &str = "assets";

/// Glyph for a catalog icon name. Unknown names get a neutral dot.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "bone" => "\u{1F9B4}",
        "brain" => "\u{1F9E0}",
        "heart" => "\u{2764}\u{FE0F}",
        "apple" => "\u{1F34E}",
        "wind" | "lungs" => "\u{1FAC1}",
        "microscope" => "\u{1F52C}",
        _ => "\u{25CF}",
    }
}

/// Path of an image asset relative to the app root.
pub fn asset_src(image: &str) -> String {
    format!("{}/{}", ASSET_DIR, image.trim_start_matches('/'))
}

/// CSS class for an animation slot.
pub fn animation_class(kind: AnimationKind) -> &'static str {
    match kind {
        AnimationKind::Heartbeat => "animation-heartbeat",
        AnimationKind::Breathing => "animation-breathing",
        AnimationKind::ActionPotential => "animation-action-potential",
    }
}
