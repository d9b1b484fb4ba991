//! Multi-selection bookkeeping for the rendered listing.
//!
//! Selection is keyed by entry path and always interpreted against the
//! ordered list of currently visible paths.

use std::collections::HashSet;

/// Selected paths, the range anchor and the selection-mode flag.
///
/// Selection mode is active whenever the set is non-empty. Toggling the last
/// entry off keeps the mode on; only [`clear`](Self::clear) turns it off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionModel {
    selected: HashSet<String>,
    anchor: Option<String>,
    mode_active: bool,
    all_selected: bool,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click-style selection to `path`.
    ///
    /// - `range` with a visible anchor adds the inclusive span between the
    ///   anchor and `path`, keeping everything already selected.
    /// - `toggle` flips `path` alone.
    /// - Otherwise the selection becomes exactly `path`.
    ///
    /// Returns `false` (and changes nothing) when `path` is not visible.
    pub fn select(&mut self, path: &str, range: bool, toggle: bool, visible: &[String]) -> bool {
        let Some(target) = visible.iter().position(|p| p == path) else {
            return false;
        };

        let anchor_index = self
            .anchor
            .as_deref()
            .and_then(|anchor| visible.iter().position(|p| p == anchor));

        match anchor_index {
            Some(start) if range => {
                let (lo, hi) = (start.min(target), start.max(target));
                self.selected.extend(visible[lo..=hi].iter().cloned());
            }
            _ if toggle => {
                if !self.selected.remove(path) {
                    self.selected.insert(path.to_string());
                }
            }
            _ => {
                self.selected.clear();
                self.selected.insert(path.to_string());
            }
        }

        self.anchor = Some(path.to_string());
        self.mode_active = true;
        self.all_selected = false;
        true
    }

    /// Toggle "select all": enabling selects every visible path, disabling
    /// clears the selection.
    pub fn select_all(&mut self, visible: &[String]) {
        if self.all_selected {
            self.clear();
        } else {
            self.selected = visible.iter().cloned().collect();
            self.all_selected = true;
            self.mode_active = !self.selected.is_empty();
        }
    }

    /// Empty the selection, leave selection mode and forget the anchor.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
        self.mode_active = false;
        self.all_selected = false;
    }

    /// Drop selected paths that are no longer visible.
    ///
    /// Used after in-place re-renders; the anchor is dropped with its entry.
    pub fn retain_visible(&mut self, visible: &[String]) {
        let visible: HashSet<&str> = visible.iter().map(String::as_str).collect();
        self.selected.retain(|p| visible.contains(p.as_str()));
        if self
            .anchor
            .as_deref()
            .is_some_and(|anchor| !visible.contains(anchor))
        {
            self.anchor = None;
        }
        if !self.selected.is_empty() {
            self.mode_active = true;
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.selected.contains(path)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[cfg(test)]
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn is_mode_active(&self) -> bool {
        self.mode_active
    }

    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }

    /// Selected paths in visible order.
    pub fn ordered(&self, visible: &[String]) -> Vec<String> {
        visible
            .iter()
            .filter(|p| self.selected.contains(p.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_plain_select_replaces_selection() {
        let v = visible(&["A", "B", "C"]);
        let mut sel = SelectionModel::new();
        assert!(sel.select("A", false, false, &v));
        assert!(sel.select("B", false, false, &v));
        assert_eq!(sel.ordered(&v), vec!["B"]);
        assert_eq!(sel.anchor(), Some("B"));
        assert!(sel.is_mode_active());
    }

    #[test]
    fn test_toggle_twice_empties_selection() {
        let v = visible(&["A", "B"]);
        let mut sel = SelectionModel::new();
        sel.select("A", false, true, &v);
        assert!(sel.contains("A"));
        sel.select("A", false, true, &v);
        assert!(sel.is_empty());
        // Mode stays on until an explicit clear
        assert!(sel.is_mode_active());
    }

    #[test]
    fn test_toggle_keeps_other_selections() {
        let v = visible(&["A", "B", "C"]);
        let mut sel = SelectionModel::new();
        sel.select("A", false, false, &v);
        sel.select("C", false, true, &v);
        assert_eq!(sel.ordered(&v), vec!["A", "C"]);
    }

    #[test]
    fn test_range_from_anchor() {
        let v = visible(&["A", "B", "C", "D"]);
        let mut sel = SelectionModel::new();
        sel.select("A", false, false, &v);
        sel.select("D", true, false, &v);
        assert_eq!(sel.ordered(&v), vec!["A", "B", "C", "D"]);
        assert_eq!(sel.anchor(), Some("D"));
    }

    #[test]
    fn test_range_is_direction_agnostic_and_additive() {
        let v = visible(&["A", "B", "C", "D", "E"]);
        let mut sel = SelectionModel::new();
        sel.select("A", false, false, &v);
        sel.select("D", false, true, &v);
        sel.select("B", true, false, &v);
        assert_eq!(sel.ordered(&v), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_range_without_anchor_is_plain_select() {
        let v = visible(&["A", "B", "C"]);
        let mut sel = SelectionModel::new();
        sel.select("B", true, false, &v);
        assert_eq!(sel.ordered(&v), vec!["B"]);
    }

    #[test]
    fn test_select_invisible_path_is_ignored() {
        let v = visible(&["A"]);
        let mut sel = SelectionModel::new();
        assert!(!sel.select("Z", false, false, &v));
        assert!(sel.is_empty());
        assert!(!sel.is_mode_active());
    }

    #[test]
    fn test_select_all_toggles() {
        let v = visible(&["A", "B", "C"]);
        let mut sel = SelectionModel::new();
        sel.select_all(&v);
        assert_eq!(sel.len(), 3);
        assert!(sel.is_all_selected());
        assert!(sel.is_mode_active());
        sel.select_all(&v);
        assert!(sel.is_empty());
        assert!(!sel.is_mode_active());
    }

    #[test]
    fn test_clear_resets_everything() {
        let v = visible(&["A", "B"]);
        let mut sel = SelectionModel::new();
        sel.select("A", false, false, &v);
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
        assert!(!sel.is_mode_active());
    }

    #[test]
    fn test_retain_visible_drops_missing_paths() {
        let v = visible(&["A", "B", "C"]);
        let mut sel = SelectionModel::new();
        sel.select("A", false, false, &v);
        sel.select("C", false, true, &v);
        sel.retain_visible(&visible(&["A", "B"]));
        assert_eq!(sel.ordered(&v), vec!["A"]);
        assert_eq!(sel.anchor(), None);
    }
}
