//! Reusable UI components.
//!
//! Accent colours are passed as tokens (`"heart"`, `"nervous"`, ...) and
//! turned into `accent-<token>` classes defined by the app stylesheet.

mod button;
mod section;

pub use button::*;
pub use section::*;
