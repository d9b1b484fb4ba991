//! Status line above the listing.
//!
//! Shows the directory as clickable path segments, or the category/search
//! summary, plus the loading indicator and the last action notice.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Notice, QueryContext};

stylance::import_crate_style!(css, "src/components/explorer/status_bar.module.css");

/// Split a path into `(label, path up to and including label)` pairs.
///
/// Both `/` and `\` separate segments; the original separators are kept in
/// the cumulative paths.
fn path_segments(path: &str) -> Vec<(String, String)> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, ch) in path.char_indices().chain(std::iter::once((path.len(), '/'))) {
        if ch == '/' || ch == '\\' {
            if idx > start {
                segments.push((path[start..idx].to_string(), path[..idx].to_string()));
            }
            start = idx + ch.len_utf8();
        }
    }
    segments
}

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let context = Memo::new(move |_| explorer.controller.with(|c| c.context().clone()));
    let summary = Memo::new(move |_| explorer.controller.with(|c| c.status_line()));
    let loading = Signal::derive(move || explorer.controller.with(|c| c.is_loading()));
    let notice = Memo::new(move |_| explorer.controller.with(|c| c.notice().cloned()));

    view! {
        <div class=css::statusBar>
            <nav class=css::location>
                {move || match context.get() {
                    QueryContext::DirectoryListing { path } => {
                        let segments = path_segments(&path);
                        if segments.is_empty() {
                            return view! { <span class=css::current>{path}</span> }.into_any();
                        }
                        let last = segments.len().saturating_sub(1);
                        segments
                            .into_iter()
                            .enumerate()
                            .map(|(idx, (label, target))| {
                                let separator = (idx > 0)
                                    .then(|| view! { <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span> });
                                let segment = if idx == last {
                                    view! { <span class=css::current>{label}</span> }.into_any()
                                } else {
                                    view! {
                                        <button
                                            class=css::segment
                                            on:click=move |_| explorer.navigate(&target)
                                        >
                                            {label}
                                        </button>
                                    }
                                        .into_any()
                                };
                                view! { {separator} {segment} }
                            })
                            .collect_view()
                            .into_any()
                    }
                    _ => view! { <span class=css::current>{move || summary.get()}</span> }.into_any(),
                }}
            </nav>

            <Show when=move || loading.get()>
                <span class=css::loading>"Loading…"</span>
            </Show>

            {move || notice.get().map(|notice| {
                let (class, text) = match notice {
                    Notice::Info(text) => (css::notice.to_string(), text),
                    Notice::Error(text) => (format!("{} {}", css::notice, css::noticeError), text),
                };
                view! {
                    <div class=class role="status">
                        <span>{text}</span>
                        <button
                            class=css::dismiss
                            on:click=move |_| explorer.dismiss_notice()
                            title="Dismiss"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
