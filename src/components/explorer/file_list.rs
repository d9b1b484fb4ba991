//! File list component for explorer view.
//!
//! Renders the current listing as a grid of tiles or a list with columns.
//! Click selects (Shift extends, Ctrl/Cmd toggles), a second click on the
//! same entry within the double-activation window opens it.

use icondata::Icon as IconData;
use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, MenuTarget};
use crate::components::icons as ic;
use crate::core::Listing;
use crate::models::{Category, DirectoryEntry, DisplayMode, HighlightSpan, SortField};
use crate::utils::format::{format_date_iso, format_size};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Get icon for file/directory based on type
fn get_icon(entry: &DirectoryEntry) -> IconData {
    if entry.is_dir() {
        ic::FOLDER
    } else {
        Category::from_path(&entry.name).map_or(ic::FILE, ic::category_icon)
    }
}

/// What the listing area should show.
#[derive(Clone, PartialEq)]
enum ListBody {
    Pending,
    Failed(String),
    Empty(&'static str),
    Entries(Vec<DirectoryEntry>),
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let display_mode = Signal::derive(move || explorer.controller.with(|c| c.view().display_mode));

    let body = Memo::new(move |_| {
        explorer.controller.with(|c| match c.listing() {
            Listing::NotLoaded => ListBody::Pending,
            Listing::Failed(message) => ListBody::Failed(message.clone()),
            Listing::Entries(entries) if entries.is_empty() => {
                if c.context().is_search() {
                    ListBody::Empty("No matching files")
                } else {
                    ListBody::Empty("This folder is empty")
                }
            }
            Listing::Entries(_) => {
                ListBody::Entries(c.visible_entries().into_iter().cloned().collect())
            }
        })
    });

    let handle_background_menu = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        explorer.open_menu(ev.client_x(), ev.client_y(), MenuTarget::Background);
    };

    view! {
        <div
            class=move || match display_mode.get() {
                DisplayMode::Grid => format!("{} {}", css::container, css::grid),
                DisplayMode::List => format!("{} {}", css::container, css::list),
            }
            role="grid"
            aria-label="File list"
            on:contextmenu=handle_background_menu
        >
            {move || match body.get() {
                ListBody::Pending => view! {
                    <p class=css::placeholder>"Loading…"</p>
                }.into_any(),
                ListBody::Failed(message) => view! {
                    <div class=css::error role="alert">
                        <p>{message}</p>
                        <button class=css::retry on:click=move |_| explorer.refresh()>
                            "Try again"
                        </button>
                    </div>
                }.into_any(),
                ListBody::Empty(message) => view! {
                    <p class=css::placeholder>{message}</p>
                }.into_any(),
                ListBody::Entries(entries) => view! {
                    <Show when=move || display_mode.get() == DisplayMode::List>
                        <ListHeader />
                    </Show>
                    <For
                        each=move || entries.clone()
                        key=|entry| entry.path.clone()
                        children=move |entry| view! { <FileListItem entry=entry /> }
                    />
                }.into_any(),
            }}
        </div>
    }
}

/// Column header for list view; clicking a column sorts by it.
#[component]
fn ListHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;
    let view_state = Memo::new(move |_| explorer.controller.with(|c| c.view()));

    let column = move |field: SortField, class: &'static str| {
        view! {
            <button
                class=class
                on:click=move |_| explorer.controller.update(|c| c.set_sort(field))
            >
                {field.label()}
                {move || {
                    let view = view_state.get();
                    (view.sort_field == Some(field)).then(|| format!(" {}", view.sort_direction))
                }}
            </button>
        }
    };

    view! {
        <div class=css::listHeader role="row">
            <span class=css::headerCheck></span>
            <span class=css::headerIcon></span>
            {column(SortField::Name, css::headerName)}
            {column(SortField::Size, css::headerSize)}
            {column(SortField::Type, css::headerType)}
            {column(SortField::ModifiedAt, css::headerDate)}
        </div>
    }
}

/// Name with search matches emphasized.
fn highlighted_name(spans: Vec<HighlightSpan>) -> impl IntoView {
    spans
        .into_iter()
        .map(|span| {
            if span.is_highlighted {
                view! { <mark class=css::highlight>{span.text}</mark> }.into_any()
            } else {
                view! { <span>{span.text}</span> }.into_any()
            }
        })
        .collect_view()
}

#[component]
fn FileListItem(entry: DirectoryEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let is_dir = entry.is_dir();
    let icon = get_icon(&entry);
    let size = format_size(if is_dir { None } else { entry.size });
    let modified = format_date_iso(entry.modified_at);
    let kind = entry.kind.label();
    let spans = entry.name_spans();

    let path = StoredValue::new(entry.path.clone());
    let is_selected =
        Signal::derive(move || explorer.controller.with(|c| c.is_selected(&path.get_value())));
    let selection_mode =
        Signal::derive(move || explorer.controller.with(|c| c.selection().is_mode_active()));

    let handle_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        explorer.close_menu();
        explorer.activate(
            &path.get_value(),
            ev.shift_key(),
            ev.ctrl_key() || ev.meta_key(),
        );
    };

    let handle_check = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        explorer.toggle_selected(&path.get_value());
    };

    let handle_menu = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        explorer.open_menu(
            ev.client_x(),
            ev.client_y(),
            MenuTarget::Entry {
                path: path.get_value(),
                is_dir,
            },
        );
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            explorer.open(&path.get_value());
        }
    };

    let item_class = move || {
        let mut class = css::item.to_string();
        if is_selected.get() {
            class = format!("{} {}", class, css::selected);
        }
        if is_dir {
            class = format!("{} {}", class, css::directory);
        }
        class
    };

    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:contextmenu=handle_menu
            on:keydown=handle_keydown
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
            title=entry.path.clone()
        >
            <span class=move || {
                if selection_mode.get() || is_selected.get() {
                    format!("{} {}", css::check, css::checkVisible)
                } else {
                    css::check.to_string()
                }
            }>
                <input
                    type="checkbox"
                    prop:checked=move || is_selected.get()
                    on:click=handle_check
                    aria-label="Select"
                />
            </span>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name>{highlighted_name(spans)}</span>
            <span class=css::size>{size}</span>
            <span class=css::kind>{kind}</span>
            <span class=css::date>{modified}</span>
        </div>
    }
}
