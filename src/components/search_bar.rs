//! Search Bar Component
//!
//! Free-text search over names and descriptions, with a short suggestion
//! list under the input.

use leptos::prelude::*;
use menu_core::catalog::MenuItem;

use crate::components::BadgeList;
use crate::store::{
    store_choose_suggestion, store_set_search, store_suggestions_open, use_menu_store, with_session,
};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_menu_store();
    let (input_value, set_input_value) = signal(String::new());

    // Empty below the minimum term length
    let suggestions = move || with_session(&store, |s| s.suggestions());

    let choose = move |item_id: String| {
        if let Some(name) = store_choose_suggestion(&store, &item_id) {
            set_input_value.set(name);
        }
    };

    view! {
        <div class="search-container">
            <i class="fas fa-search search-icon"></i>
            <input
                id="search-input"
                type="search"
                placeholder="Search dishes..."
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store_set_search(&store, &value);
                    set_input_value.set(value);
                }
            />

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() || !store_suggestions_open(&store) {
                    view! { <div class="search-suggestions hidden"></div> }.into_any()
                } else {
                    view! {
                        <div class="search-suggestions">
                            {sugg
                                .into_iter()
                                .map(|item| view! { <SuggestionEntry item=item on_choose=choose /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SuggestionEntry(item: MenuItem, #[prop(into)] on_choose: Callback<String>) -> impl IntoView {
    let store = use_menu_store();
    let badges = with_session(&store, |s| s.badges(&item));
    let id = item.id.clone();

    view! {
        <div
            class="suggestion-item"
            on:click=move |ev| {
                ev.prevent_default();
                on_choose.run(id.clone());
            }
        >
            {match item.image_url.clone() {
                Some(src) => view! {
                    <img src=src alt=item.name.clone() class="lazy-load" loading="lazy" />
                }
                .into_any(),
                None => view! { <div class="suggestion-placeholder">"🍽️"</div> }.into_any(),
            }}
            <div class="suggestion-content">
                <div class="suggestion-name">{item.name.clone()}</div>
                <BadgeList badges=badges />
            </div>
        </div>
    }
}
