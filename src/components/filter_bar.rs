//! Filter Bar Component
//!
//! One chip per named filter plus one per custom tag. Exactly one chip is
//! active at a time.

use leptos::prelude::*;
use menu_core::catalog::MenuFilter;

use crate::store::{store_set_filter, use_menu_store, with_session};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_menu_store();
    let chips = move || with_session(&store, |s| s.filter_chips());

    view! {
        <div class="filter-bar">
            <For
                each=chips
                key=|chip| (chip.key.clone(), chip.label.clone())
                children=move |chip| {
                    let key = chip.key.clone();
                    let key_for_click = chip.key.clone();
                    let label = chip.label;
                    let is_active = move || with_session(&store, |s| s.active_filter().key() == key);
                    let base = if chip.custom { "filter-btn custom-tag-filter" } else { "filter-btn" };

                    view! {
                        <button
                            class=move || if is_active() { format!("{base} active") } else { base.to_string() }
                            data-filter=chip.key
                            on:click=move |_| {
                                store_set_filter(&store, MenuFilter::from_key(&key_for_click));
                            }
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
