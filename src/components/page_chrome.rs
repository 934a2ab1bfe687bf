//! Page Chrome
//!
//! Dark-mode toggle and the reading progress bar.

use leptos::ev;
use leptos::prelude::*;

const DARK_MODE_CLASS: &str = "dark-mode";

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (dark, set_dark) = signal(false);

    let toggle = move |_| {
        let Some(body) = document().body() else {
            return;
        };
        match body.class_list().toggle(DARK_MODE_CLASS) {
            Ok(now_dark) => set_dark.set(now_dark),
            Err(err) => tracing::warn!(error = ?err, "Theme toggle failed"),
        }
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" title="Toggle theme" on:click=toggle>
            <i class=move || if dark.get() { "fas fa-sun" } else { "fas fa-moon" }></i>
        </button>
    }
}

/// Percentage of the document scrolled past, 0 when it does not scroll
fn scrolled_percent() -> f64 {
    let Some(root) = document().document_element() else {
        return 0.0;
    };
    let height = f64::from(root.scroll_height() - root.client_height());
    if height > 0.0 {
        f64::from(root.scroll_top()) / height * 100.0
    } else {
        0.0
    }
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (percent, set_percent) = signal(0.0_f64);

    // Lives as long as the page
    let _listener = window_event_listener(ev::scroll, move |_| set_percent.set(scrolled_percent()));

    view! {
        <div class="scroll-progress" style:width=move || format!("{:.1}%", percent.get())></div>
    }
}
