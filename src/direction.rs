//! Document directionality for the desktop webview.

use dioxus::prelude::*;

use anatomy_core::{Direction, DocumentSink};

/// Writes `dir` and `lang` on the webview's root element.
pub struct WebviewDocument;

/// Script setting both attributes on `document.documentElement`.
pub fn direction_script(direction: Direction, lang_tag: &str) -> String {
    // Language tags come from Language::code(); keep the script injection-free anyway
    let lang_tag: String = lang_tag
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    format!(
        "document.documentElement.dir = '{}'; document.documentElement.lang = '{}';",
        direction.as_attr(),
        lang_tag
    )
}

impl DocumentSink for WebviewDocument {
    fn apply(&mut self, direction: Direction, lang_tag: &str) {
        let script = direction_script(direction, lang_tag);
        spawn(async move {
            if let Err(e) = document::eval(&script).await {
                tracing::warn!("Failed to update document direction: {:?}", e);
            }
        });
    }
}
