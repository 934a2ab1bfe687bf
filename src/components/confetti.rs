//! Confetti Component
//!
//! A short burst of falling pieces that clears itself.

use leptos::prelude::*;

const PIECES: usize = 50;
const LIFETIME_MS: u32 = 3000;
const COLORS: [&str; 5] = ["#f44336", "#2196f3", "#ffeb3b", "#4caf50", "#9c27b0"];

fn random() -> f64 {
    js_sys::Math::random()
}

#[component]
pub fn Confetti() -> impl IntoView {
    let (visible, set_visible) = signal(true);
    gloo_timers::callback::Timeout::new(LIFETIME_MS, move || set_visible.set(false)).forget();

    let styles: Vec<String> = (0..PIECES)
        .map(|_| {
            let color = COLORS[(random() * COLORS.len() as f64) as usize % COLORS.len()];
            format!(
                "left: {:.1}vw; background-color: {color}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                random() * 100.0,
                random() * 0.5,
                random() * 2.0 + 2.0,
            )
        })
        .collect();

    move || {
        visible.get().then(|| {
            let pieces = styles
                .iter()
                .map(|style| view! { <div class="confetti" style=style.clone()></div> })
                .collect_view();
            view! { <div class="confetti-container">{pieces}</div> }
        })
    }
}
