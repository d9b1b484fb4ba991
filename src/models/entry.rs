use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Entry Kind
// =============================================================================

/// Whether an entry is a file or a directory.
///
/// Serialized as the backend's `"file"` / `"directory"` type label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Type label used for sorting by type.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Highlight Spans
// =============================================================================

/// One segment of a search-highlighted name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HighlightSpan {
    pub text: String,
    /// True for the segment that matched the query
    #[serde(rename = "highlight", default)]
    pub is_highlighted: bool,
}

// =============================================================================
// Directory Entry
// =============================================================================

/// A file or directory record as returned by the listing, category and search
/// endpoints.
///
/// `path` identifies the entry within a listing. Entries are immutable snapshots;
/// sorting never reorders the fetched list in place.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes (files only)
    #[serde(default)]
    pub size: Option<u64>,
    /// Last modification time as Unix timestamp (seconds, may be fractional)
    #[serde(rename = "modified", default)]
    pub modified_at: Option<f64>,
    /// Name split into highlighted spans (search results only)
    #[serde(
        rename = "highlightedName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub match_highlight: Option<Vec<HighlightSpan>>,
}

impl DirectoryEntry {
    #[cfg(test)]
    pub fn file(name: &str, path: &str, size: u64, modified_at: f64) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: EntryKind::File,
            size: Some(size),
            modified_at: Some(modified_at),
            match_highlight: None,
        }
    }

    #[cfg(test)]
    pub fn directory(name: &str, path: &str, modified_at: f64) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: EntryKind::Directory,
            size: None,
            modified_at: Some(modified_at),
            match_highlight: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Size used for ordering; missing sizes count as zero.
    pub fn sort_size(&self) -> u64 {
        self.size.unwrap_or(0)
    }

    /// Timestamp used for ordering; missing timestamps count as zero.
    pub fn sort_modified(&self) -> f64 {
        self.modified_at.unwrap_or(0.0)
    }

    /// Display spans for the name: server highlights when present, otherwise
    /// the whole name unhighlighted.
    pub fn name_spans(&self) -> Vec<HighlightSpan> {
        match &self.match_highlight {
            Some(spans) if !spans.is_empty() => spans.clone(),
            _ => vec![HighlightSpan {
                text: self.name.clone(),
                is_highlighted: false,
            }],
        }
    }
}
