//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the window title bar.
pub const APP_NAME: &str = "FileDeck";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the local file service.
pub const API_BASE_URL: &str = "http://localhost:5000";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Drive listed when the drives endpoint fails or returns nothing.
pub const FALLBACK_DRIVE: &str = "C:";

/// API endpoint paths (relative to [`API_BASE_URL`]).
pub mod endpoints {
    pub const DRIVES: &str = "/api/drives";
    pub const FILES: &str = "/api/files";
    pub const CATEGORY: &str = "/api/files/category";
    pub const SEARCH: &str = "/api/search";
    pub const OPEN: &str = "/api/open";
    pub const ORGANIZE: &str = "/api/organize";
    pub const FOLDER_TREE: &str = "/api/folders/tree";
}

// =============================================================================
// Interaction Timing
// =============================================================================

/// Quiet period after the last search keystroke before the query is sent.
pub const SEARCH_DEBOUNCE_MS: f64 = 300.0;

/// Maximum gap between two activations of the same entry to count as a
/// double activation.
pub const DOUBLE_ACTIVATION_MS: f64 = 300.0;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
