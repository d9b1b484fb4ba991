//! Sidebar with drives, categories and the folder tree.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{QueryContext, TreeRow};
use crate::models::Category;

stylance::import_crate_style!(css, "src/components/explorer/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class=css::sidebar>
            <Drives />
            <Categories />
            <Folders />
        </aside>
    }
}

#[component]
fn Drives() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    view! {
        <section class=css::section>
            <h2 class=css::heading>"Drives"</h2>
            <For
                each=move || explorer.drives.get()
                key=|drive| drive.clone()
                children=move |drive| {
                    let target = drive.clone();
                    view! {
                        <button class=css::item on:click=move |_| explorer.navigate(&target)>
                            <span class=css::icon><Icon icon=ic::DRIVE /></span>
                            <span class=css::label>{drive}</span>
                        </button>
                    }
                }
            />
        </section>
    }
}

#[component]
fn Categories() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let active = Memo::new(move |_| {
        explorer.controller.with(|c| match c.context() {
            QueryContext::CategoryFilter { category, .. } => Some(*category),
            _ => None,
        })
    });

    view! {
        <section class=css::section>
            <h2 class=css::heading>"Categories"</h2>
            {Category::ALL
                .into_iter()
                .map(|category| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == Some(category) {
                                    format!("{} {}", css::item, css::itemActive)
                                } else {
                                    css::item.to_string()
                                }
                            }
                            on:click=move |_| explorer.show_category(category)
                            title=format!("Show {} in the current folder", category.label())
                        >
                            <span class=css::icon><Icon icon=ic::category_icon(category) /></span>
                            <span class=css::label>{category.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Folders() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let rows = Memo::new(move |_| {
        let drives = explorer.drives.get();
        explorer.tree.with(|t| t.rows(&drives))
    });

    view! {
        <section class=css::section>
            <h2 class=css::heading>"Folders"</h2>
            <For
                each=move || rows.get()
                key=|row| (row.path.clone(), row.expanded, row.loading)
                children=move |row| view! { <FolderRow row=row /> }
            />
        </section>
    }
}

#[component]
fn FolderRow(row: TreeRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let toggle_path = row.path.clone();
    let open_path = row.path.clone();
    let indent = format!("padding-left: {}px", 8 + row.depth * 14);
    let (chevron, toggle_title) = if row.expanded {
        (ic::CHEVRON_DOWN, "Collapse")
    } else {
        (ic::CHEVRON_RIGHT, "Expand")
    };

    view! {
        <div class=css::treeRow style=indent>
            <button
                class=css::toggle
                on:click=move |_| explorer.toggle_folder(&toggle_path)
                aria-expanded=row.expanded.to_string()
                title=toggle_title
            >
                <Icon icon=chevron />
            </button>
            <button class=css::item on:click=move |_| explorer.navigate(&open_path)>
                <span class=css::icon><Icon icon=ic::FOLDER /></span>
                <span class=css::label>{row.name}</span>
                {row.loading.then(|| view! { <span class=css::loading>"…"</span> })}
            </button>
        </div>
    }
}
