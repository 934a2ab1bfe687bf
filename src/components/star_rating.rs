//! Star Rating Component
//!
//! One row of five stars for a single rating dimension.

use leptos::prelude::*;
use menu_core::feedback::{FeedbackSession, RatingDimension, StarRow, MAX_STARS};

/// Short haptic tick on touch devices; silently ignored elsewhere
fn vibrate() {
    let _ = window().navigator().vibrate_with_duration(50);
}

#[component]
pub fn StarRating(dimension: RatingDimension, session: RwSignal<FeedbackSession>) -> impl IntoView {
    let initial = session.with_untracked(|s| s.ratings().get(dimension));
    let (row, set_row) = signal(StarRow::new(initial));

    let on_click = move |position: u8| {
        let score = set_row.try_update(|r| r.click(position)).unwrap_or(position);
        session.update(|s| s.rate(dimension, score));
        vibrate();
    };

    view! {
        <div class="rating-row">
            <span class="rating-label">{dimension.label()}</span>
            <div
                class="star-rating"
                data-rating=dimension.key()
                on:mouseleave=move |_| set_row.update(|r| r.leave())
            >
                {(1..=MAX_STARS)
                    .map(|position| {
                        let class = move || {
                            let current = row.get();
                            match (position <= current.fill(), current.is_previewing()) {
                                (true, true) => "fas fa-star preview",
                                (true, false) => "fas fa-star active",
                                (false, _) => "far fa-star",
                            }
                        };
                        view! {
                            <i
                                class=class
                                data-value=position.to_string()
                                on:click=move |_| on_click(position)
                                on:mouseenter=move |_| set_row.update(|r| r.hover(position))
                            ></i>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
