//! Page components for Human Biology Explorer.

mod home;
mod system_view;

pub use home::Home;
pub use system_view::SystemView;
