//! UI Components for Human Biology Explorer.

mod header;
mod human_body;
mod info_panel;
mod language_toggle;
mod media;
mod phase_cycle;
mod system_card;
mod system_grid;

pub use header::Header;
pub use human_body::HumanBody;
pub use info_panel::InfoPanel;
pub use language_toggle::LanguageToggle;
pub use media::{animation_class, asset_src, icon_glyph};
pub use phase_cycle::PhaseCycleView;
pub use system_card::SystemCard;
pub use system_grid::SystemGrid;
