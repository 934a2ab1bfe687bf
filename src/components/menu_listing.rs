//! Menu Listing Component
//!
//! Category sections with their surviving items, or the loading / empty
//! state when there is nothing to show.

use leptos::prelude::*;
use menu_core::catalog::{capitalize, Diet, FeedStatus, MenuItem, DEFAULT_DESCRIPTION};

use crate::components::{BadgeList, PriceTag};
use crate::store::{store_open_item, use_menu_store, with_session};

#[component]
pub fn MenuListing() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div id="menu-container" class="menu-container">
            {move || {
                let (loading, empty, groups) = with_session(&store, |s| {
                    (*s.status() == FeedStatus::Loading, s.empty_state(), s.listing())
                });

                if loading {
                    return view! {
                        <div class="loading-state">
                            <div class="spinner"></div>
                            <p>"Loading menu..."</p>
                        </div>
                    }
                    .into_any();
                }
                if let Some(message) = empty {
                    return view! { <div class="no-items">{message}</div> }.into_any();
                }

                groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="menu-section" id=group.name.clone()>
                                <h2 class="section-title">{capitalize(&group.name)}</h2>
                                <div class="items-list">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <MenuEntry item=item /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

fn diet_marker(diet: Diet) -> impl IntoView {
    match diet {
        Diet::Veg => Some(view! { <span class="veg-nonveg-icon veg">"🟢"</span> }.into_any()),
        Diet::NonVeg => Some(view! { <span class="veg-nonveg-icon nonveg">"🔴"</span> }.into_any()),
        Diet::Unspecified => None,
    }
}

#[component]
fn MenuEntry(item: MenuItem) -> impl IntoView {
    let store = use_menu_store();
    let badges = with_session(&store, |s| s.badges(&item));
    let id = item.id.clone();
    let class = if item.is_high_priority() {
        "menu-item-list-entry high-priority"
    } else {
        "menu-item-list-entry"
    };
    let description = item
        .description
        .clone()
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    view! {
        <div class=class on:click=move |_| store_open_item(&store, id.clone())>
            {match item.image_url.clone() {
                Some(src) => view! {
                    <img src=src alt=item.name.clone() class="item-image-list lazy-load" loading="lazy" />
                }
                .into_any(),
                None => view! { <div class="item-image-list placeholder">"🍽️"</div> }.into_any(),
            }}
            <div class="item-content-list">
                <div class="item-header">
                    <h3 class="item-name-list">{item.name.clone()}</h3>
                    {diet_marker(item.diet())}
                </div>
                <BadgeList badges=badges />
                <p class="item-description-list">{description}</p>
                <PriceTag price=item.price.clone() />
            </div>
        </div>
    }
}
