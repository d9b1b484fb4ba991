//! Sort and display-mode state, and the render-time ordering of listings.

use std::cmp::Ordering;

use crate::models::{DirectoryEntry, DisplayMode, SortDirection, SortField};

/// Process-wide view preferences.
///
/// `sort_field` is `None` until the user picks a column; listings then keep
/// the order the server returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
    pub display_mode: DisplayMode,
}

impl ViewState {
    /// Choose a sort column.
    ///
    /// Re-choosing the active field flips the direction; a new field always
    /// starts ascending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_field == Some(field) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = Some(field);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Order a plain listing by the active field.
    ///
    /// Files and directories are not grouped. The input is left untouched.
    pub fn sort_listing<'a>(&self, entries: &'a [DirectoryEntry]) -> Vec<&'a DirectoryEntry> {
        let mut sorted: Vec<&DirectoryEntry> = entries.iter().collect();
        let Some(field) = self.sort_field else {
            return sorted;
        };
        sorted.sort_by(|a, b| {
            let ord = compare_by_field(a, b, field);
            match self.sort_direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        sorted
    }
}

/// Order search results: directories first, then by name.
///
/// Ignores the user's sort preference.
pub fn sort_search_results(entries: &[DirectoryEntry]) -> Vec<&DirectoryEntry> {
    let mut sorted: Vec<&DirectoryEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        b.is_dir()
            .cmp(&a.is_dir())
            .then_with(|| compare_names(&a.name, &b.name))
    });
    sorted
}

fn compare_by_field(a: &DirectoryEntry, b: &DirectoryEntry, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Size => a.sort_size().cmp(&b.sort_size()),
        SortField::Type => a.kind.label().cmp(b.kind.label()),
        SortField::ModifiedAt => a.sort_modified().total_cmp(&b.sort_modified()),
    }
}

/// Case-insensitive name order, raw name as tie-break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&DirectoryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    fn mixed() -> Vec<DirectoryEntry> {
        vec![
            DirectoryEntry::directory("b", "/b", 10.0),
            DirectoryEntry::file("a", "/a", 300, 30.0),
        ]
    }

    #[test]
    fn test_set_sort_same_field_flips() {
        let mut view = ViewState::default();
        view.set_sort(SortField::Name);
        assert_eq!(view.sort_field, Some(SortField::Name));
        assert_eq!(view.sort_direction, SortDirection::Ascending);
        view.set_sort(SortField::Name);
        assert_eq!(view.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_set_sort_new_field_resets_ascending() {
        let mut view = ViewState::default();
        view.set_sort(SortField::Name);
        view.set_sort(SortField::Name);
        assert_eq!(view.sort_direction, SortDirection::Descending);
        view.set_sort(SortField::Size);
        assert_eq!(view.sort_field, Some(SortField::Size));
        assert_eq!(view.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_unsorted_listing_keeps_server_order() {
        let view = ViewState::default();
        let entries = mixed();
        assert_eq!(names(&view.sort_listing(&entries)), vec!["b", "a"]);
    }

    #[test]
    fn test_listing_sort_does_not_group_directories() {
        let mut view = ViewState::default();
        view.set_sort(SortField::Name);
        let entries = mixed();
        assert_eq!(names(&view.sort_listing(&entries)), vec!["a", "b"]);
        // Fetched order is untouched
        assert_eq!(entries[0].name, "b");
    }

    #[test]
    fn test_search_sort_groups_directories_first() {
        let entries = mixed();
        assert_eq!(names(&sort_search_results(&entries)), vec!["b", "a"]);
    }

    #[test]
    fn test_name_order_ignores_case() {
        let entries = vec![
            DirectoryEntry::file("Zeta.txt", "/Zeta.txt", 1, 0.0),
            DirectoryEntry::file("apple.txt", "/apple.txt", 1, 0.0),
            DirectoryEntry::directory("Docs", "/Docs", 0.0),
            DirectoryEntry::directory("archive", "/archive", 0.0),
        ];
        assert_eq!(
            names(&sort_search_results(&entries)),
            vec!["archive", "Docs", "apple.txt", "Zeta.txt"]
        );

        let mut view = ViewState::default();
        view.set_sort(SortField::Name);
        assert_eq!(
            names(&view.sort_listing(&entries)),
            vec!["apple.txt", "archive", "Docs", "Zeta.txt"]
        );
    }

    #[test]
    fn test_sort_by_size_treats_missing_as_zero() {
        let mut view = ViewState::default();
        view.set_sort(SortField::Size);
        // Directory has no size, sorts as 0
        let entries = mixed();
        assert_eq!(names(&view.sort_listing(&entries)), vec!["b", "a"]);
        view.set_sort(SortField::Size);
        assert_eq!(names(&view.sort_listing(&entries)), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_by_type_and_modified() {
        let mut view = ViewState::default();
        let entries = mixed();
        view.set_sort(SortField::Type);
        // "directory" < "file"
        assert_eq!(names(&view.sort_listing(&entries)), vec!["b", "a"]);
        view.set_sort(SortField::ModifiedAt);
        assert_eq!(names(&view.sort_listing(&entries)), vec!["b", "a"]);
        view.set_sort(SortField::ModifiedAt);
        assert_eq!(names(&view.sort_listing(&entries)), vec!["a", "b"]);
    }
}
