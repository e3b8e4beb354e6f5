//! Color constants for the explorer palette.
//!
//! Each body system has one accent hue, referenced from catalog entries
//! by token (`"heart"`, `"nervous"`, ...).

// === SURFACES ===
pub const BACKGROUND: &str = "hsl(210, 40%, 98%)";
pub const CARD: &str = "#ffffff";
pub const MUTED: &str = "hsl(210, 40%, 96%)";
pub const BORDER: &str = "hsl(214, 32%, 91%)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "hsl(222, 47%, 11%)";
pub const TEXT_MUTED: &str = "hsl(215, 16%, 47%)";

// === SYSTEM ACCENTS ===
pub const SKELETON: &str = "hsl(45, 70%, 60%)";
pub const NERVOUS: &str = "hsl(270, 70%, 65%)";
pub const HEART: &str = "hsl(0, 80%, 60%)";
pub const DIGESTIVE: &str = "hsl(150, 60%, 50%)";
pub const RESPIRATORY: &str = "hsl(180, 60%, 50%)";
pub const CELL: &str = "hsl(200, 80%, 55%)";
pub const DEFAULT_ACCENT: &str = "hsl(215, 25%, 55%)";

/// Accent color for a catalog token.
pub fn accent_color(token: &str) -> &'static str {
    match token {
        "skeleton" => SKELETON,
        "nervous" => NERVOUS,
        "heart" => HEART,
        "digestive" => DIGESTIVE,
        "respiratory" => RESPIRATORY,
        "cell" => CELL,
        _ => DEFAULT_ACCENT,
    }
}

/// Stylesheet defining the palette variables and one `.accent-*` class per
/// token. Tokens that are not valid class names are skipped.
pub fn palette_css<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    let mut css = format!(
        ":root {{ --background: {}; --card: {}; --muted: {}; --border: {}; \
         --text-primary: {}; --text-muted: {}; }}\n\
         .accent-default {{ --accent: {}; }}\n",
        BACKGROUND, CARD, MUTED, BORDER, TEXT_PRIMARY, TEXT_MUTED, DEFAULT_ACCENT
    );

    let mut seen = std::collections::BTreeSet::new();
    for token in tokens {
        let valid = !token.is_empty()
            && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid && seen.insert(token) {
            css.push_str(&format!(".accent-{} {{ --accent: {}; }}\n", token, accent_color(token)));
        }
    }
    css
}
