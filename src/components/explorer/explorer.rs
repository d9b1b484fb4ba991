//! Main explorer component.
//!
//! ## Layout
//!
//! Header across the top, sidebar on the left, status line and listing on
//! the right. Keyboard shortcuts are handled here so they work wherever focus
//! sits inside the explorer, except in text inputs.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::{ContextMenu, FileList, Header, Sidebar, StatusBar};
use crate::app::AppContext;
use crate::core::{Modifiers, Shortcut, shortcut_for};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let in_text_field = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .is_some_and(|input| is_text_input(&input.type_()));
        if in_text_field && ev.key() != "Escape" {
            return;
        }

        let mods = Modifiers {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
        };
        let Some(shortcut) = shortcut_for(&ev.key(), mods) else {
            return;
        };
        ev.prevent_default();

        match shortcut {
            Shortcut::ClearSelection => {
                if explorer.context_menu.get_untracked().is_some() {
                    explorer.close_menu();
                } else {
                    explorer.clear_selection();
                }
            }
            Shortcut::SelectAll => explorer.select_all(),
            Shortcut::Back => explorer.go_back(),
            Shortcut::Forward => explorer.go_forward(),
            Shortcut::Refresh => explorer.refresh(),
        }
    };

    view! {
        <div
            class=css::explorer
            tabindex="-1"
            on:keydown=handle_keydown
            on:click=move |_| explorer.close_menu()
        >
            <Header />

            <div class=css::body>
                <Sidebar />

                <main class=css::main>
                    <StatusBar />
                    <FileList />
                </main>
            </div>

            <ContextMenu />
        </div>
    }
}

/// Input types that consume typed keys such as Backspace.
fn is_text_input(input_type: &str) -> bool {
    matches!(input_type, "" | "text" | "search")
}
