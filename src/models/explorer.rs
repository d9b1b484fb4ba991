//! Explorer view types: display mode and sort order.

use std::fmt;

/// How the listing is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Icon grid (default)
    #[default]
    Grid,
    /// Detailed rows
    List,
}

impl DisplayMode {
    /// The other mode, used by the toolbar toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Field a plain listing is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Size,
    Type,
    ModifiedAt,
}

impl SortField {
    /// All fields, in toolbar order.
    pub const ALL: [SortField; 4] = [Self::Name, Self::Size, Self::Type, Self::ModifiedAt];

    /// Column label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::Type => "Type",
            Self::ModifiedAt => "Modified",
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "▲"),
            Self::Descending => write!(f, "▼"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_toggle() {
        assert_eq!(DisplayMode::default(), DisplayMode::Grid);
        assert_eq!(DisplayMode::Grid.toggled(), DisplayMode::List);
        assert_eq!(DisplayMode::List.toggled(), DisplayMode::Grid);
    }

    #[test]
    fn test_sort_direction_flip() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
    }
}
