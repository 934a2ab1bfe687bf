//! Badge List Component

use leptos::prelude::*;
use menu_core::catalog::Badge;

/// Row of item badges; renders nothing when there are none
#[component]
pub fn BadgeList(badges: Vec<Badge>) -> impl IntoView {
    if badges.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="item-badges">
            {badges
                .into_iter()
                .map(|badge| {
                    view! {
                        <span
                            class=format!("badge {}", badge.kind.css_class())
                            data-filter=badge.filter_key
                        >
                            {badge.label}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
