//! Browser state controller.
//!
//! Owns navigation history, selection, view preferences and the query
//! dispatcher, and keeps them consistent with the listing being displayed.
//!
//! The controller never performs I/O. Intents return a [`ListRequest`]
//! describing the fetch to run; the caller runs it and hands the outcome back
//! to [`BrowserController::complete`].

use log::{debug, info};

use crate::core::error::ApiError;
use crate::core::history::NavigationHistory;
use crate::core::query::{ListRequest, QueryContext, QueryDispatcher, SearchInput};
use crate::core::selection::SelectionModel;
use crate::core::view::{ViewState, sort_search_results};
use crate::models::{Category, DirectoryEntry, DisplayMode, SortField};

/// What the listing area shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Listing {
    /// Nothing requested yet
    #[default]
    NotLoaded,
    /// Entries in server order
    Entries(Vec<DirectoryEntry>),
    /// Inline error replacing the listing
    Failed(String),
}

/// Message shown above the listing after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// How a list response was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The listing now shows the response
    Applied,
    /// The listing now shows the error
    Failed,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

/// Result of opening an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenAction {
    /// Directory: load it as a new navigation
    Navigate(ListRequest),
    /// File: ask the backend to open it
    OpenFile(String),
}

/// The explorer's complete client-side state.
#[derive(Clone, Debug, Default)]
pub struct BrowserController {
    history: NavigationHistory,
    selection: SelectionModel,
    view: ViewState,
    dispatcher: QueryDispatcher,
    listing: Listing,
    loading: bool,
    notice: Option<Notice>,
}

impl BrowserController {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to `path`, pushing it onto the history.
    ///
    /// Ends any search session.
    pub fn navigate(&mut self, path: &str) -> ListRequest {
        debug!("navigate {}", path);
        self.history.visit(path);
        self.load_directory(path.to_string())
    }

    pub fn go_back(&mut self) -> Option<ListRequest> {
        let path = self.history.go_back()?.to_string();
        debug!("back to {}", path);
        Some(self.load_directory(path))
    }

    pub fn go_forward(&mut self) -> Option<ListRequest> {
        let path = self.history.go_forward()?.to_string();
        debug!("forward to {}", path);
        Some(self.load_directory(path))
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn load_directory(&mut self, path: String) -> ListRequest {
        self.dispatcher.end_search();
        self.begin(QueryContext::DirectoryListing { path }, false)
    }

    fn begin(&mut self, target: QueryContext, preserve_selection: bool) -> ListRequest {
        self.loading = true;
        self.dispatcher.issue(target, preserve_selection)
    }

    /// Directory the current listing is rooted at.
    ///
    /// Falls back to the history position while nothing has loaded yet.
    pub fn current_directory(&self) -> Option<&str> {
        self.dispatcher
            .context()
            .base_path()
            .or_else(|| self.history.current())
    }

    // =========================================================================
    // Category filter and search
    // =========================================================================

    /// Show `category` items below the current directory. Not recorded in history.
    pub fn show_category(&mut self, category: Category) -> Option<ListRequest> {
        let base_path = self.current_directory()?.to_string();
        self.dispatcher.end_search();
        Some(self.begin(QueryContext::CategoryFilter { category, base_path }, false))
    }

    /// Feed the search box's new value.
    pub fn search_input(&mut self, query: &str, now_ms: f64) -> SearchInput {
        let current_dir = self.current_directory().map(str::to_string);
        let input = self
            .dispatcher
            .search_input(query, current_dir.as_deref(), now_ms);
        if let SearchInput::Restore(_) = &input {
            self.loading = true;
        }
        input
    }

    /// Dispatch the debounced search if its quiet period is over.
    pub fn poll_search(&mut self, now_ms: f64) -> Option<ListRequest> {
        let request = self.dispatcher.poll_search(now_ms)?;
        self.loading = true;
        Some(request)
    }

    /// Time left before a queued search can be dispatched.
    pub fn search_due_in(&self, now_ms: f64) -> Option<f64> {
        self.dispatcher.search_due_in(now_ms)
    }

    pub fn is_searching(&self) -> bool {
        self.dispatcher.search_base().is_some()
    }

    /// Reload whatever the listing represents, keeping surviving selections.
    pub fn refresh(&mut self) -> Option<ListRequest> {
        let request = self.dispatcher.refresh(true)?;
        self.loading = true;
        Some(request)
    }

    // =========================================================================
    // Responses
    // =========================================================================

    /// Apply the outcome of `request`.
    pub fn complete(
        &mut self,
        request: &ListRequest,
        result: Result<Vec<DirectoryEntry>, ApiError>,
    ) -> Completion {
        if !self.dispatcher.is_current(request.ticket) {
            info!("discarding stale response for {:?}", request.target);
            return Completion::Stale;
        }
        self.loading = false;
        // A failed target still becomes current so refresh retries it
        self.dispatcher.accept(request);

        match result {
            Ok(entries) => {
                self.listing = Listing::Entries(entries);
                if request.preserve_selection {
                    let visible = self.visible_paths();
                    self.selection.retain_visible(&visible);
                } else {
                    self.selection.clear();
                }
                Completion::Applied
            }
            Err(err) => {
                self.listing = Listing::Failed(err.to_string());
                self.selection.clear();
                Completion::Failed
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn context(&self) -> &QueryContext {
        self.dispatcher.context()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Entries in display order.
    ///
    /// Search results are always directories first, then by name; other
    /// listings follow the view's sort settings.
    pub fn visible_entries(&self) -> Vec<&DirectoryEntry> {
        let Listing::Entries(entries) = &self.listing else {
            return Vec::new();
        };
        if self.context().is_search() {
            sort_search_results(entries)
        } else {
            self.view.sort_listing(entries)
        }
    }

    pub fn visible_paths(&self) -> Vec<String> {
        self.visible_entries()
            .into_iter()
            .map(|e| e.path.clone())
            .collect()
    }

    pub fn entry(&self, path: &str) -> Option<&DirectoryEntry> {
        match &self.listing {
            Listing::Entries(entries) => entries.iter().find(|e| e.path == path),
            _ => None,
        }
    }

    /// Text for the status line above the listing.
    pub fn status_line(&self) -> String {
        let count = match &self.listing {
            Listing::Entries(entries) => entries.len(),
            _ => 0,
        };
        match self.context() {
            QueryContext::Idle => String::new(),
            QueryContext::DirectoryListing { path } => path.clone(),
            QueryContext::CategoryFilter { category, .. } => {
                format!("{}: {} items", category.label(), count)
            }
            QueryContext::SearchResults { query, base_path } => {
                format!("Found {} results for \"{}\" in {}", count, query, base_path)
            }
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Re-sort the held listing; no fetch, selection kept.
    pub fn set_sort(&mut self, field: SortField) {
        self.view.set_sort(field);
    }

    /// Switch grid/list; no fetch, selection kept.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.view.set_display_mode(mode);
    }

    pub fn toggle_display_mode(&mut self) {
        self.set_display_mode(self.view.display_mode.toggled());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selection.contains(path)
    }

    pub fn select(&mut self, path: &str, range: bool, toggle: bool) -> bool {
        let visible = self.visible_paths();
        self.selection.select(path, range, toggle, &visible)
    }

    pub fn select_all(&mut self) {
        let visible = self.visible_paths();
        self.selection.select_all(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Leave selection mode and reload the current view.
    pub fn exit_selection_mode(&mut self) -> Option<ListRequest> {
        self.selection.clear();
        self.refresh()
    }

    /// Selected paths in display order.
    pub fn selected_paths(&self) -> Vec<String> {
        self.selection.ordered(&self.visible_paths())
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Decide what opening `path` means. `None` if it is not in the listing.
    pub fn open(&mut self, path: &str) -> Option<OpenAction> {
        let is_dir = self.entry(path)?.is_dir();
        if is_dir {
            Some(OpenAction::Navigate(self.navigate(path)))
        } else {
            Some(OpenAction::OpenFile(path.to_string()))
        }
    }

    /// Record the outcome of opening a file.
    pub fn finish_open(&mut self, path: &str, result: Result<(), ApiError>) {
        if let Err(err) = result {
            self.notice = Some(Notice::Error(format!("Could not open {}: {}", path, err)));
        }
    }

    /// Files to send to the organize endpoint.
    ///
    /// Sets an error notice and returns `None` when nothing is selected.
    pub fn organize_targets(&mut self) -> Option<Vec<String>> {
        let files = self.selected_paths();
        if files.is_empty() {
            self.notice = Some(Notice::Error("No files selected".to_string()));
            return None;
        }
        Some(files)
    }

    /// Record the outcome of organizing `count` files.
    ///
    /// On success the selection is dropped and the view reloaded; on failure
    /// the listing is left as is.
    pub fn finish_organize(
        &mut self,
        count: usize,
        result: Result<(), ApiError>,
    ) -> Option<ListRequest> {
        match result {
            Ok(()) => {
                self.notice = Some(Notice::Info(format!("Organized {} items", count)));
                self.selection.clear();
                self.refresh()
            }
            Err(err) => {
                self.notice = Some(Notice::Error(format!("Organize failed: {}", err)));
                None
            }
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
