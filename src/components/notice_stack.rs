//! Notice Stack Component
//!
//! Dismissible alerts from the app context; each one also expires on its
//! own.

use leptos::prelude::*;
use menu_core::feedback::{Notice, NoticeKind};

use crate::context::use_app_context;

fn icon_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "fas fa-info-circle",
        NoticeKind::Warning => "fas fa-exclamation-circle",
        NoticeKind::Error => "fas fa-exclamation-triangle",
    }
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="alert-container">
            <For
                each=move || ctx.notices.get()
                key=|(id, _)| *id
                children=move |(id, notice): (u32, Notice)| {
                    view! {
                        <div class=notice.kind.css_class() role="alert">
                            <i class=icon_class(notice.kind)></i>
                            <span>{notice.message}</span>
                            <button class="alert-close" on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
