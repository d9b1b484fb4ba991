//! Core explorer logic.
//!
//! This module provides:
//! - [`BrowserController`] owning history, selection, view and query state
//! - [`ExplorerApi`] and [`HttpApi`] for talking to the file service
//! - [`FolderTree`] for the lazily expanded sidebar tree
//! - [`shortcut_for`] keyboard bindings and [`timing`] helpers
//!
//! Nothing here touches the DOM; the components drive it.

pub mod api;
pub mod controller;
pub mod error;
pub mod history;
pub mod query;
pub mod selection;
pub mod shortcuts;
pub mod timing;
pub mod tree;
pub mod view;

pub use api::{ExplorerApi, HttpApi, fetch_listing, resolve_drives};
pub use controller::{BrowserController, Listing, Notice, OpenAction};
pub use query::{ListRequest, QueryContext, SearchInput};
pub use shortcuts::{Modifiers, Shortcut, shortcut_for};
pub use timing::{Activation, ActivationDetector, BrowserClock, Clock};
pub use tree::{FolderTree, TreeRow};
