//! Utility modules for web and display operations.
//!
//! Provides:
//! - [`get_text`], [`post_json`] - Network fetching with timeout
//! - [`url`] - Endpoint URLs with percent-encoded paths
//! - [`format`] - Size and date formatting

mod fetch;
pub mod format;
pub mod url;

pub use fetch::{get_text, post_json};
