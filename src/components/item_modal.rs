//! Item Detail Modal
//!
//! Overlay for the open item. Closed by the close button or a click on
//! the backdrop.

use leptos::prelude::*;
use menu_core::catalog::ItemDetail;

use crate::components::BadgeList;
use crate::store::{store_close_item, store_open_item_id, use_menu_store, with_session};

#[component]
pub fn ItemModal() -> impl IntoView {
    let store = use_menu_store();

    // An id that vanished from the cache closes the modal
    let detail = move || store_open_item_id(&store).and_then(|id| with_session(&store, |s| s.detail(&id)));

    move || match detail() {
        None => ().into_any(),
        Some(detail) => view! {
            <div
                id="item-modal"
                class="modal active"
                on:click=move |ev| {
                    if ev.target() == ev.current_target() {
                        store_close_item(&store);
                    }
                }
            >
                <DetailCard detail=detail on_close=move |_| store_close_item(&store) />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn DetailCard(detail: ItemDetail, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-content">
            <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
            {detail.image_url.map(|src| view! {
                <img class="modal-image" src=src alt=detail.name.clone() loading="lazy" />
            })}
            <div class="modal-body">
                <h2 class="modal-title">{detail.name.clone()}</h2>
                <BadgeList badges=detail.badges />
                <p class="modal-description">{detail.description}</p>
                <div class="modal-info">
                    <div class="info-row">
                        <span class="info-label">"Serves:"</span>
                        <span>{detail.serves}</span>
                    </div>
                    <div class="price-options">
                        <div class="price-option">
                            <span>"Half Plate:"</span>
                            " "
                            <strong>{detail.price_half}</strong>
                        </div>
                        <div class="price-option">
                            <span>"Full Plate:"</span>
                            " "
                            <strong>{detail.price_full}</strong>
                        </div>
                    </div>
                    <p class="nutritional-note">{detail.nutritional_note}</p>
                </div>
            </div>
        </div>
    }
}
