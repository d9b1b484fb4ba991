//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryEntry`], [`HighlightSpan`] - Listing records from the API
//! - [`Category`] - Predefined category filters
//! - [`FolderNode`] - Sidebar folder tree
//! - [`DisplayMode`], [`SortField`], [`SortDirection`] - View management

mod category;
mod entry;
mod explorer;
mod tree;

pub use category::Category;
pub use entry::{DirectoryEntry, HighlightSpan};
pub use explorer::{DisplayMode, SortDirection, SortField};
pub use tree::FolderNode;
