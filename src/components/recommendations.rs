//! Recommendations Strip
//!
//! Featured items under the active filter. Search does not narrow it.

use leptos::prelude::*;
use menu_core::catalog::{format_amount, MenuItem};

use crate::components::BadgeList;
use crate::store::{store_open_item, use_menu_store, with_session};

#[component]
pub fn Recommendations() -> impl IntoView {
    let store = use_menu_store();
    let picks = move || with_session(&store, |s| s.recommendations());

    view! {
        <section class="recommendations">
            <h2 class="section-title">"Recommended for you"</h2>
            <div class="recommended-items">
                {move || picks().into_iter().map(|item| view! { <RecommendedCard item=item /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn RecommendedCard(item: MenuItem) -> impl IntoView {
    let store = use_menu_store();
    let badges = with_session(&store, |s| s.badges(&item));
    let id = item.id.clone();
    let price = item
        .price
        .headline()
        .map(format_amount)
        .unwrap_or_else(|| "N/A".to_string());

    view! {
        <div class="recommended-item" on:click=move |_| store_open_item(&store, id.clone())>
            {match item.image_url.clone() {
                Some(src) => view! {
                    <img src=src alt=item.name.clone() class="lazy-load" loading="lazy" />
                }
                .into_any(),
                None => view! { <div class="recommended-placeholder">"🍽️"</div> }.into_any(),
            }}
            <div class="recommended-item-content">
                <h3>{item.name.clone()}</h3>
                <BadgeList badges=badges />
                <div class="item-price-list">{price}</div>
            </div>
        </div>
    }
}
