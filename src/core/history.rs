//! Back/forward navigation history over visited directory paths.

/// Visited paths plus a cursor at the current one.
///
/// The cursor is `None` exactly when the history is empty; otherwise it is a
/// valid index. Visiting from a non-tail position discards the forward entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new visit.
    ///
    /// Revisiting the current path still appends an entry.
    pub fn visit(&mut self, path: impl Into<String>) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(path.into());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back, returning the path to display.
    pub fn go_back(&mut self) -> Option<&str> {
        let cursor = self.cursor.filter(|&c| c > 0)?;
        self.cursor = Some(cursor - 1);
        self.current()
    }

    /// Step forward, returning the path to display.
    pub fn go_forward(&mut self) -> Option<&str> {
        let cursor = self.cursor.filter(|&c| c + 1 < self.entries.len())?;
        self.cursor = Some(cursor + 1);
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|c| self.entries[c].as_str())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let mut history = NavigationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert_eq!(history.current(), None);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
        assert_eq!(history.go_back(), None);
        assert_eq!(history.go_forward(), None);
    }

    #[test]
    fn test_back_then_visit_truncates_forward() {
        let mut history = NavigationHistory::new();
        history.visit("A");
        history.visit("B");
        assert_eq!(history.go_back(), Some("A"));
        assert_eq!(history.current(), Some("A"));
        assert!(!history.can_go_back());
        assert!(history.can_go_forward());

        history.visit("C");
        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.go_forward(), None);
        assert_eq!(history.go_back(), Some("A"));
        assert_eq!(history.go_forward(), Some("C"));
    }

    #[test]
    fn test_same_path_is_not_deduplicated() {
        let mut history = NavigationHistory::new();
        history.visit("/docs");
        history.visit("/docs");
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert!(history.can_go_back());
    }

    #[test]
    fn test_back_forward_do_not_truncate() {
        let mut history = NavigationHistory::new();
        for path in ["A", "B", "C"] {
            history.visit(path);
        }
        history.go_back();
        history.go_back();
        assert_eq!(history.current(), Some("A"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.go_forward(), Some("B"));
        assert_eq!(history.go_forward(), Some("C"));
        assert_eq!(history.go_forward(), None);
        assert_eq!(history.current(), Some("C"));
    }
}
