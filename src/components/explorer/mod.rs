//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Header`] - Navigation, search, sort and selection controls
//! - [`Sidebar`] - Drives, categories and the folder tree
//! - [`FileList`] - Grid or list view of the current listing
//! - [`StatusBar`] - Location or result summary
//! - [`ContextMenu`] - Right-click actions

mod context_menu;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod sidebar;
mod status_bar;

pub use context_menu::ContextMenu;
pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
