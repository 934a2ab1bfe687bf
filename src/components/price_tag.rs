//! Price Tag Component
//!
//! Listing price slot: a flat price or the offered plate sizes.

use leptos::prelude::*;
use menu_core::catalog::{format_amount, Price, PriceDisplay};

#[component]
pub fn PriceTag(price: Price) -> impl IntoView {
    match price.display() {
        PriceDisplay::Single(amount) => view! {
            <span class="item-price-list">{format_amount(amount)}</span>
        }
        .into_any(),
        PriceDisplay::Options(options) => view! {
            <div class="plate-sizes">
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <div class="plate-option">
                                <span>{format!("{}:", option.label)}</span>
                                " "
                                <strong>{format_amount(option.amount)}</strong>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        PriceDisplay::NoSizesAvailable => view! {
            <span class="item-price-list unavailable">"No sizes available"</span>
        }
        .into_any(),
        PriceDisplay::NotAvailable => view! {
            <span class="item-price-list unavailable">"Price not available"</span>
        }
        .into_any(),
    }
}
