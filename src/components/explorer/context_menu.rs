//! Right-click menu for entries and the listing background.

use leptos::prelude::*;

use crate::app::{AppContext, ContextMenu as MenuState, MenuTarget};

stylance::import_crate_style!(css, "src/components/explorer/context_menu.module.css");

#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    view! {
        {move || explorer.context_menu.get().map(|menu| view! { <MenuPanel menu=menu /> })}
    }
}

/// Action behind a menu item.
#[derive(Clone)]
enum MenuAction {
    Open(String),
    ToggleSelected(String),
    SelectAll,
    Organize,
    Refresh,
}

#[component]
fn MenuPanel(menu: MenuState) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let style = format!("left: {}px; top: {}px", menu.x, menu.y);

    let items = match menu.target {
        MenuTarget::Entry { path, is_dir } => {
            let selected = explorer.controller.with_untracked(|c| c.is_selected(&path));
            vec![
                (
                    if is_dir { "Open folder" } else { "Open" },
                    MenuAction::Open(path.clone()),
                ),
                (
                    if selected { "Deselect" } else { "Select" },
                    MenuAction::ToggleSelected(path),
                ),
                ("Select all", MenuAction::SelectAll),
                ("Organize selected", MenuAction::Organize),
            ]
        }
        MenuTarget::Background => vec![
            ("Refresh", MenuAction::Refresh),
            ("Select all", MenuAction::SelectAll),
        ],
    };

    view! {
        <div
            class=css::menu
            style=style
            role="menu"
            on:click=|ev| ev.stop_propagation()
            on:contextmenu=|ev| ev.prevent_default()
        >
            {items
                .into_iter()
                .map(|(label, action)| {
                    view! {
                        <button
                            class=css::item
                            role="menuitem"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                explorer.close_menu();
                                match &action {
                                    MenuAction::Open(path) => explorer.open(path),
                                    MenuAction::ToggleSelected(path) => explorer.toggle_selected(path),
                                    MenuAction::SelectAll => explorer.select_all(),
                                    MenuAction::Organize => explorer.organize(),
                                    MenuAction::Refresh => explorer.refresh(),
                                }
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
