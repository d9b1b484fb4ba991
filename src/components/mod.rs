//! UI components built with Leptos.
//!
//! - [`explorer`] - File browser UI
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
