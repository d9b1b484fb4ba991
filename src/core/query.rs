//! What the listing currently represents and which request is in flight.
//!
//! Every list request gets a generation [`Ticket`]; only the newest ticket's
//! response may be applied, so a slow response for an earlier request can
//! never overwrite a newer listing.

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::core::timing::Debouncer;
use crate::models::Category;

/// The source of the current listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QueryContext {
    /// Nothing loaded yet
    #[default]
    Idle,
    /// Contents of a directory
    DirectoryListing { path: String },
    /// Items of a category below a base directory
    CategoryFilter { category: Category, base_path: String },
    /// Search results below a base directory
    SearchResults { query: String, base_path: String },
}

impl QueryContext {
    /// The directory this listing is rooted at.
    pub fn base_path(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::DirectoryListing { path } => Some(path),
            Self::CategoryFilter { base_path, .. } | Self::SearchResults { base_path, .. } => {
                Some(base_path)
            }
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Self::SearchResults { .. })
    }
}

/// Generation number of a list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A list fetch to perform, produced synchronously by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub ticket: Ticket,
    pub target: QueryContext,
    /// Keep selected paths that survive the reload
    pub preserve_selection: bool,
}

/// Result of feeding a keystroke to the search box.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchInput {
    /// A search will be dispatched at `deadline_ms` unless superseded.
    Scheduled { deadline_ms: f64 },
    /// The box was cleared; reload the session's base directory.
    Restore(ListRequest),
    /// Nothing to do (no session to end, or no directory to search in).
    Ignored,
}

/// Routes intents to list requests and tracks the active search session.
#[derive(Clone, Debug)]
pub struct QueryDispatcher {
    context: QueryContext,
    generation: u64,
    search_base: Option<String>,
    debouncer: Debouncer<String>,
}

impl Default for QueryDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryDispatcher {
    pub fn new() -> Self {
        Self {
            context: QueryContext::Idle,
            generation: 0,
            search_base: None,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE_MS),
        }
    }

    pub fn context(&self) -> &QueryContext {
        &self.context
    }

    /// Base directory captured at the start of the current search session.
    pub fn search_base(&self) -> Option<&str> {
        self.search_base.as_deref()
    }

    /// Create a request and make it the only one whose response counts.
    pub fn issue(&mut self, target: QueryContext, preserve_selection: bool) -> ListRequest {
        self.generation += 1;
        ListRequest {
            ticket: Ticket(self.generation),
            target,
            preserve_selection,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket == Ticket(self.generation)
    }

    /// Adopt a completed request's target as the current context.
    pub fn accept(&mut self, request: &ListRequest) {
        self.context = request.target.clone();
    }

    /// Forget the search session and any pending keystroke.
    pub fn end_search(&mut self) {
        self.search_base = None;
        self.debouncer.cancel();
    }

    /// Handle the search box changing to `query`.
    ///
    /// The first non-empty keystroke captures `current_dir` as the session's
    /// base; later keystrokes reuse it.
    pub fn search_input(
        &mut self,
        query: &str,
        current_dir: Option<&str>,
        now_ms: f64,
    ) -> SearchInput {
        let query = query.trim();

        if query.is_empty() {
            self.debouncer.cancel();
            return match self.search_base.take() {
                Some(base) => SearchInput::Restore(
                    self.issue(QueryContext::DirectoryListing { path: base }, false),
                ),
                None => SearchInput::Ignored,
            };
        }

        if self.search_base.is_none() {
            let Some(dir) = current_dir else {
                return SearchInput::Ignored;
            };
            self.search_base = Some(dir.to_string());
        }

        let deadline_ms = self.debouncer.schedule(now_ms, query.to_string());
        SearchInput::Scheduled { deadline_ms }
    }

    /// Dispatch the pending search once its quiet period has elapsed.
    pub fn poll_search(&mut self, now_ms: f64) -> Option<ListRequest> {
        let base_path = self.search_base.clone()?;
        let query = self.debouncer.poll(now_ms)?;
        Some(self.issue(QueryContext::SearchResults { query, base_path }, false))
    }

    /// Time until the pending search is due, while a session has one queued.
    pub fn search_due_in(&self, now_ms: f64) -> Option<f64> {
        self.search_base.as_ref()?;
        self.debouncer.remaining_ms(now_ms)
    }

    /// Replay the current context, if any.
    pub fn refresh(&mut self, preserve_selection: bool) -> Option<ListRequest> {
        if self.context == QueryContext::Idle {
            return None;
        }
        Some(self.issue(self.context.clone(), preserve_selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str) -> QueryContext {
        QueryContext::DirectoryListing {
            path: path.to_string(),
        }
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut dispatcher = QueryDispatcher::new();
        let first = dispatcher.issue(dir("/a"), false);
        let second = dispatcher.issue(dir("/b"), false);
        assert!(!dispatcher.is_current(first.ticket));
        assert!(dispatcher.is_current(second.ticket));
    }

    #[test]
    fn test_search_base_captured_once_per_session() {
        let mut dispatcher = QueryDispatcher::new();
        dispatcher.search_input("re", Some("/docs"), 0.0);
        // Later keystrokes pass whatever is displayed; the session base wins
        dispatcher.search_input("rep", Some("Found 3 results in /docs"), 100.0);
        let request = dispatcher.poll_search(400.0).unwrap();
        assert_eq!(
            request.target,
            QueryContext::SearchResults {
                query: "rep".to_string(),
                base_path: "/docs".to_string(),
            }
        );
    }

    #[test]
    fn test_search_waits_for_quiet_period() {
        let mut dispatcher = QueryDispatcher::new();
        let input = dispatcher.search_input("a", Some("/"), 1000.0);
        assert_eq!(input, SearchInput::Scheduled { deadline_ms: 1300.0 });
        assert_eq!(dispatcher.poll_search(1299.0), None);
        assert!(dispatcher.poll_search(1300.0).is_some());
    }

    #[test]
    fn test_clearing_search_restores_base_and_ends_session() {
        let mut dispatcher = QueryDispatcher::new();
        dispatcher.search_input("x", Some("/docs"), 0.0);
        match dispatcher.search_input("", Some("/elsewhere"), 50.0) {
            SearchInput::Restore(request) => assert_eq!(request.target, dir("/docs")),
            other => panic!("Expected Restore, got {:?}", other),
        }
        assert_eq!(dispatcher.search_base(), None);
        // The pending keystroke was dropped with the session
        assert_eq!(dispatcher.poll_search(1000.0), None);
        assert_eq!(
            dispatcher.search_input("  ", Some("/docs"), 0.0),
            SearchInput::Ignored
        );
    }

    #[test]
    fn test_search_without_directory_is_ignored() {
        let mut dispatcher = QueryDispatcher::new();
        assert_eq!(dispatcher.search_input("a", None, 0.0), SearchInput::Ignored);
        assert_eq!(dispatcher.poll_search(1000.0), None);
    }

    #[test]
    fn test_refresh_replays_context() {
        let mut dispatcher = QueryDispatcher::new();
        assert_eq!(dispatcher.refresh(true), None);
        let request = dispatcher.issue(dir("/a"), false);
        dispatcher.accept(&request);
        let replay = dispatcher.refresh(true).unwrap();
        assert_eq!(replay.target, dir("/a"));
        assert!(replay.preserve_selection);
    }
}
