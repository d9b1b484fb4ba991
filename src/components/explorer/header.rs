//! Explorer header component.
//!
//! Contains navigation buttons, the search box, sort controls and the
//! selection actions.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::{DisplayMode, SortField};

stylance::import_crate_style!(css, "src/components/explorer/header.module.css");

/// Explorer header with navigation and actions.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=css::header>
            <NavButtons />
            <span class=css::title>{APP_NAME}</span>
            <SearchBox />
            <SortButtons />
            <ActionButtons />
        </header>
    }
}

/// Back and forward through the navigation history.
#[component]
fn NavButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let can_back = Signal::derive(move || explorer.controller.with(|c| c.can_go_back()));
    let can_forward = Signal::derive(move || explorer.controller.with(|c| c.can_go_forward()));

    view! {
        <div class=css::navButtons>
            <button
                class=move || button_class(css::navButton, !can_back.get())
                on:click=move |_| explorer.go_back()
                disabled=move || !can_back.get()
                title="Back (Alt+Left)"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <button
                class=move || button_class(css::navButton, !can_forward.get())
                on:click=move |_| explorer.go_forward()
                disabled=move || !can_forward.get()
                title="Forward (Alt+Right)"
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </div>
    }
}

fn button_class(base: &str, disabled: bool) -> String {
    if disabled {
        format!("{} {}", base, css::disabled)
    } else {
        base.to_string()
    }
}

/// Search box; every keystroke restarts the debounce.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;
    let (query, set_query) = signal(String::new());

    // Leaving a search by navigation empties the box
    Effect::new(move |_| {
        let searching = explorer.controller.with(|c| c.is_searching());
        if !searching && !query.get_untracked().trim().is_empty() {
            set_query.set(String::new());
        }
    });

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let value = input.value();
        set_query.set(value.clone());
        explorer.search(value);
    };

    view! {
        <label class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                type="search"
                class=css::searchInput
                placeholder="Search this folder"
                autocomplete="off"
                spellcheck="false"
                prop:value=query
                on:input=handle_input
            />
        </label>
    }
}

/// One button per sort field; the active field shows its direction.
#[component]
fn SortButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;
    let view_state = Memo::new(move |_| explorer.controller.with(|c| c.view()));

    view! {
        <div class=css::sortButtons role="group" aria-label="Sort by">
            {SortField::ALL
                .into_iter()
                .map(|field| {
                    let is_active = move || view_state.get().sort_field == Some(field);
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    format!("{} {}", css::sortButton, css::sortButtonActive)
                                } else {
                                    css::sortButton.to_string()
                                }
                            }
                            on:click=move |_| explorer.controller.update(|c| c.set_sort(field))
                            title=format!("Sort by {}", field.label())
                        >
                            {field.label()}
                            {move || {
                                is_active()
                                    .then(|| format!(" {}", view_state.get().sort_direction))
                            }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// View toggle, refresh and selection actions.
#[component]
fn ActionButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let display_mode = Signal::derive(move || explorer.controller.with(|c| c.view().display_mode));
    let selected_count = Signal::derive(move || explorer.controller.with(|c| c.selection().len()));
    let no_selection =
        Signal::derive(move || explorer.controller.with(|c| c.selection().is_empty()));
    let all_selected =
        Signal::derive(move || explorer.controller.with(|c| c.selection().is_all_selected()));
    let selection_mode =
        Signal::derive(move || explorer.controller.with(|c| c.selection().is_mode_active()));

    view! {
        <div class=css::actionButtons>
            <button
                class=css::actionButton
                on:click=move |_| explorer.controller.update(|c| c.toggle_display_mode())
                title=move || match display_mode.get() {
                    DisplayMode::Grid => "Show as list",
                    DisplayMode::List => "Show as grid",
                }
            >
                {move || match display_mode.get() {
                    DisplayMode::Grid => view! { <Icon icon=ic::LIST /> },
                    DisplayMode::List => view! { <Icon icon=ic::GRID /> },
                }}
            </button>
            <button
                class=css::actionButton
                on:click=move |_| explorer.refresh()
                title="Refresh (F5)"
            >
                <Icon icon=ic::REFRESH />
            </button>
            <button
                class=move || {
                    if all_selected.get() {
                        format!("{} {}", css::actionButton, css::actionButtonActive)
                    } else {
                        css::actionButton.to_string()
                    }
                }
                on:click=move |_| explorer.select_all()
                title="Select all (Ctrl+A)"
            >
                <Icon icon=ic::SELECT_ALL />
            </button>
            <button
                class=move || button_class(css::actionButton, no_selection.get())
                on:click=move |_| explorer.organize()
                title="Organize selected files into category folders"
            >
                <Icon icon=ic::ORGANIZE />
                <span class=css::badge>
                    {move || (!no_selection.get()).then(|| selected_count.get())}
                </span>
            </button>
            <Show when=move || selection_mode.get()>
                <button
                    class=css::doneButton
                    on:click=move |_| explorer.exit_selection_mode()
                    title="Leave selection mode"
                >
                    "Done"
                </button>
            </Show>
        </div>
    }
}
