//! Anatomy Explorer UI Components
//!
//! Dioxus building blocks shared by the explorer views: buttons, section
//! headings with an accent dot, and name/description cards.
//!
//! ## Direction
//!
//! Components never hard-code left or right. Layout uses logical CSS
//! properties (`inset-inline-start`, `margin-inline-end`, ...) so the
//! same markup works under `dir="ltr"` and `dir="rtl"`.

pub mod components;

pub use components::*;
