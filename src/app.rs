//! Menu & Feedback Frontend App
//!
//! Picks the page to render from the host document and provides the
//! shared context.

use leptos::prelude::*;
use menu_core::AppConfig;

use crate::context::AppContext;
use crate::feedback_page::FeedbackPage;
use crate::menu_page::MenuPage;

/// Which host page loaded the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Menu,
    Feedback,
}

impl Page {
    /// Read `<body data-page="...">`; anything unknown is the menu
    pub fn detect() -> Self {
        let tag = document().body().and_then(|body| body.dataset().get("page"));
        match tag.as_deref() {
            Some("feedback") => Page::Feedback,
            _ => Page::Menu,
        }
    }
}

#[component]
pub fn App(config: AppConfig, page: Page) -> impl IntoView {
    provide_context(AppContext::new(config));

    match page {
        Page::Menu => view! { <MenuPage /> }.into_any(),
        Page::Feedback => view! { <FeedbackPage /> }.into_any(),
    }
}
