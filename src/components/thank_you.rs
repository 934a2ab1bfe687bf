//! Thank You Component
//!
//! Shown after a stored submission. Offers a fresh form after a delay.

use leptos::prelude::*;
use menu_core::feedback::RESTART_PROMPT;

use crate::components::Confetti;
use crate::context::use_app_context;

#[component]
pub fn ThankYou(#[prop(into)] on_restart: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let delay_ms = ctx.config.with_value(|c| c.restart_prompt_delay_ms);

    gloo_timers::callback::Timeout::new(delay_ms, move || {
        match window().confirm_with_message(RESTART_PROMPT) {
            Ok(true) => on_restart.run(()),
            Ok(false) => tracing::debug!("Staying on thank-you view"),
            Err(err) => tracing::warn!(error = ?err, "Restart prompt unavailable"),
        }
    })
    .forget();

    view! {
        <div id="thankYouMessage" class="thank-you-message">
            <Confetti />
            <i class="fas fa-check-circle"></i>
            <h2>"Thank you for your feedback!"</h2>
            <p>"Your response helps us serve you better."</p>
        </div>
    }
}
