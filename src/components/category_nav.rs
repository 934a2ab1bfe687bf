//! Category Navigation Component
//!
//! Horizontal chips that scroll their listing section into view.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::store::{use_menu_store, with_session};

/// Smooth-scroll to the section with this id; a no-op if it is not rendered
fn scroll_to_section(id: &str) {
    let Some(section) = document().get_element_by_id(id) else {
        tracing::debug!(section = id, "Category section not on screen");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn CategoryNav() -> impl IntoView {
    let store = use_menu_store();
    let (active, set_active) = signal::<Option<String>>(None);
    let chips = move || with_session(&store, |s| s.category_chips());

    view! {
        <nav class="category-scroll">
            <For
                each=chips
                key=|chip| chip.name.clone()
                children=move |chip| {
                    let name = chip.name.clone();
                    let target = chip.name;
                    view! {
                        <button
                            class=move || {
                                if active.get().as_deref() == Some(name.as_str()) {
                                    "category-chip active"
                                } else {
                                    "category-chip"
                                }
                            }
                            on:click=move |_| {
                                set_active.set(Some(target.clone()));
                                scroll_to_section(&target);
                            }
                        >
                            {chip.label}
                        </button>
                    }
                }
            />
        </nav>
    }
}
