//! Root application module.
//!
//! Contains the main App component, AppContext definition, ExplorerState,
//! and the glue that runs controller requests against the file service.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::components::explorer::Explorer;
use crate::config::DOUBLE_ACTIVATION_MS;
use crate::core::{
    Activation, ActivationDetector, BrowserClock, BrowserController, Clock, ExplorerApi,
    FolderTree, HttpApi, ListRequest, OpenAction, SearchInput, fetch_listing, resolve_drives,
};
use crate::models::Category;

// ============================================================================
// ContextMenu
// ============================================================================

/// What a right-click was aimed at.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuTarget {
    /// An entry in the listing
    Entry { path: String, is_dir: bool },
    /// Empty space in the listing
    Background,
}

/// An open context menu at viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenu {
    pub x: i32,
    pub y: i32,
    pub target: MenuTarget,
}

// ============================================================================
// ExplorerState
// ============================================================================

/// Explorer state managed with Leptos signals.
///
/// Every handler mutates the [`BrowserController`] synchronously, then runs
/// the resulting request in a spawned task that hands the response back to
/// [`BrowserController::complete`]. Responses that lost the race to a newer
/// request are dropped there.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct ExplorerState {
    /// History, selection, view and listing.
    pub controller: RwSignal<BrowserController>,
    /// Drive roots shown in the sidebar.
    pub drives: RwSignal<Vec<String>>,
    /// Sidebar folder tree.
    pub tree: RwSignal<FolderTree>,
    /// Currently open context menu.
    pub context_menu: RwSignal<Option<ContextMenu>>,
    /// Pending search dispatch; replacing it cancels the previous timer.
    search_timer: StoredValue<Option<Timeout>, LocalStorage>,
    activation: StoredValue<ActivationDetector>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(BrowserController::new()),
            drives: RwSignal::new(Vec::new()),
            tree: RwSignal::new(FolderTree::new()),
            context_menu: RwSignal::new(None),
            search_timer: StoredValue::new_local(None),
            activation: StoredValue::new(ActivationDetector::new(DOUBLE_ACTIVATION_MS)),
        }
    }

    /// Load the drive list and open the first drive.
    pub fn init(self) {
        spawn_local(async move {
            let drives = resolve_drives(&HttpApi).await;
            info!("drives: {:?}", drives);
            let first = drives.first().cloned();
            self.drives.set(drives);
            if let Some(drive) = first {
                self.navigate(&drive);
            }
        });
    }

    /// Run a list request and apply its response.
    fn run(self, request: ListRequest) {
        spawn_local(async move {
            let result = fetch_listing(&HttpApi, &request.target).await;
            self.controller.update(|c| {
                c.complete(&request, result);
            });
        });
    }

    fn run_opt(self, request: Option<ListRequest>) {
        if let Some(request) = request {
            self.run(request);
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn navigate(self, path: &str) {
        self.cancel_search_timer();
        let request = self.controller.try_update(|c| c.navigate(path));
        self.run_opt(request);
    }

    pub fn go_back(self) {
        self.cancel_search_timer();
        let request = self.controller.try_update(|c| c.go_back()).flatten();
        self.run_opt(request);
    }

    pub fn go_forward(self) {
        self.cancel_search_timer();
        let request = self.controller.try_update(|c| c.go_forward()).flatten();
        self.run_opt(request);
    }

    pub fn show_category(self, category: Category) {
        self.cancel_search_timer();
        let request = self
            .controller
            .try_update(|c| c.show_category(category))
            .flatten();
        self.run_opt(request);
    }

    pub fn refresh(self) {
        let request = self.controller.try_update(|c| c.refresh()).flatten();
        self.run_opt(request);
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    /// Feed a new search box value; dispatches after the quiet period.
    pub fn search(self, query: String) {
        let now = BrowserClock.now_ms();
        let input = self.controller.try_update(|c| c.search_input(&query, now));

        match input {
            Some(SearchInput::Scheduled { deadline_ms }) => {
                self.arm_search_timer(deadline_ms - now);
            }
            Some(SearchInput::Restore(request)) => {
                self.cancel_search_timer();
                self.run(request);
            }
            Some(SearchInput::Ignored) | None => self.cancel_search_timer(),
        }
    }

    fn arm_search_timer(self, delay_ms: f64) {
        let delay = delay_ms.max(0.0).ceil() as u32;
        let timer = Timeout::new(delay, move || self.poll_search());
        self.search_timer.set_value(Some(timer));
    }

    fn poll_search(self) {
        let now = BrowserClock.now_ms();
        let request = self.controller.try_update(|c| c.poll_search(now)).flatten();
        if request.is_none() {
            // Fired before the deadline; wait out the rest
            if let Some(wait) = self.controller.with_untracked(|c| c.search_due_in(now)) {
                self.arm_search_timer(wait);
                return;
            }
        }
        self.run_opt(request);
    }

    fn cancel_search_timer(self) {
        self.search_timer.set_value(None);
    }

    // ------------------------------------------------------------------------
    // Selection and activation
    // ------------------------------------------------------------------------

    /// Click on an entry: select it, or open it on a double activation.
    pub fn activate(self, path: &str, range: bool, toggle: bool) {
        let now = BrowserClock.now_ms();
        let activation = self
            .activation
            .try_update_value(|a| a.register(path, now))
            .unwrap_or(Activation::Single);

        match activation {
            Activation::Double => self.open(path),
            Activation::Single => {
                self.controller.update(|c| {
                    c.select(path, range, toggle);
                });
            }
        }
    }

    /// Select `path` unless it already is, keeping the rest of the selection.
    pub fn ensure_selected(self, path: &str) {
        self.controller.update(|c| {
            if !c.is_selected(path) {
                c.select(path, false, false);
            }
        });
    }

    pub fn toggle_selected(self, path: &str) {
        self.controller.update(|c| {
            c.select(path, false, true);
        });
    }

    pub fn select_all(self) {
        self.controller.update(|c| c.select_all());
    }

    pub fn clear_selection(self) {
        self.controller.update(|c| c.clear_selection());
    }

    pub fn exit_selection_mode(self) {
        let request = self
            .controller
            .try_update(|c| c.exit_selection_mode())
            .flatten();
        self.run_opt(request);
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Open an entry: directories navigate, files go to the host.
    pub fn open(self, path: &str) {
        self.activation.update_value(|a| a.reset());
        let action = self.controller.try_update(|c| c.open(path)).flatten();

        match action {
            Some(OpenAction::Navigate(request)) => {
                self.cancel_search_timer();
                self.run(request);
            }
            Some(OpenAction::OpenFile(path)) => {
                spawn_local(async move {
                    let result = HttpApi.open(&path).await;
                    if let Err(err) = &result {
                        warn!("open {} failed: {}", path, err);
                    }
                    self.controller.update(|c| c.finish_open(&path, result));
                });
            }
            None => warn!("open: {} is not in the listing", path),
        }
    }

    /// Send the selected files to the organize endpoint.
    pub fn organize(self) {
        let Some(files) = self.controller.try_update(|c| c.organize_targets()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = HttpApi.organize(&files).await;
            let (count, result) = match result {
                Ok(count) => (count, Ok(())),
                Err(err) => (0, Err(err)),
            };
            let request = self
                .controller
                .try_update(|c| c.finish_organize(count, result))
                .flatten();
            self.run_opt(request);
        });
    }

    pub fn dismiss_notice(self) {
        self.controller.update(|c| c.dismiss_notice());
    }

    // ------------------------------------------------------------------------
    // Sidebar tree and context menu
    // ------------------------------------------------------------------------

    /// Expand or collapse a sidebar folder, fetching its children on first use.
    pub fn toggle_folder(self, path: &str) {
        let Some(fetch) = self.tree.try_update(|t| t.toggle(path)).flatten() else {
            return;
        };
        spawn_local(async move {
            match HttpApi.folder_tree(&fetch).await {
                Ok(node) => self.tree.update(|t| t.insert(&fetch, node)),
                Err(err) => {
                    warn!("folder tree {} failed: {}", fetch, err);
                    self.tree.update(|t| t.fail(&fetch));
                }
            }
        });
    }

    pub fn open_menu(self, x: i32, y: i32, target: MenuTarget) {
        if let MenuTarget::Entry { path, .. } = &target {
            self.ensure_selected(path);
        }
        self.context_menu.set(Some(ContextMenu { x, y, target }));
    }

    pub fn close_menu(self) {
        self.context_menu.set(None);
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// File explorer state.
    pub explorer: ExplorerState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            explorer: ExplorerState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Loads drives and opens the first one
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.explorer.init();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f6f8;
                    color: #1f2328;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #cf222e; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #57606a; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #cf222e; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #0969da;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Explorer />
        </ErrorBoundary>
    }
}
