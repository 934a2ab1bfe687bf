//! Feedback Page
//!
//! Rating form, submission and the thank-you view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::feedback::{
    notice_for, Cluster, ContactForm, FeedbackSession, FeedbackWriter, FlowState, RatingDimension,
};

use crate::commands::{self, StoreFeedbackWriter};
use crate::components::{NoticeStack, StarRating, ThankYou};
use crate::context::use_app_context;

fn dimensions(cluster: Cluster) -> impl Iterator<Item = RatingDimension> {
    RatingDimension::ALL.into_iter().filter(move |d| d.cluster() == cluster)
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = RwSignal::new(FeedbackSession::new());
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());

    let busy = move || session.with(|s| s.is_busy());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let contact = ContactForm::new(name.get_untracked(), phone.get_untracked());
        let client = commands::client_context();
        let Some(started) = session.try_update(|s| s.begin_submit(&contact, &client)) else {
            return;
        };

        let record = match started {
            Ok(record) => record,
            Err(err) => {
                ctx.notify(notice_for(&err));
                session.update(|s| s.recover());
                return;
            }
        };

        let writer = StoreFeedbackWriter::new(ctx.config.with_value(|c| c.feedback_collection.clone()));
        spawn_local(async move {
            let outcome = writer.append(&record).await;
            if let Some(notice) = session.try_update(|s| s.finish(outcome)).flatten() {
                ctx.notify(notice);
                session.update(|s| s.recover());
            }
        });
    };

    let restart = move |_: ()| {
        tracing::info!("Starting a new feedback form");
        session.update(|s| s.reset());
        set_name.set(String::new());
        set_phone.set(String::new());
    };

    view! {
        <div class="feedback-container">
            <NoticeStack />
            <Show
                when=move || session.with(|s| s.state() != FlowState::Succeeded)
                fallback=move || view! { <ThankYou on_restart=restart /> }
            >
                <form id="feedbackForm" class="feedback-form" on:submit=on_submit>
                    <section class="rating-section">
                        <h2>"Menu experience"</h2>
                        {dimensions(Cluster::Menu)
                            .map(|dimension| view! { <StarRating dimension=dimension session=session /> })
                            .collect_view()}
                    </section>
                    <section class="rating-section">
                        <h2>"Restaurant experience"</h2>
                        {dimensions(Cluster::Restaurant)
                            .map(|dimension| view! { <StarRating dimension=dimension session=session /> })
                            .collect_view()}
                    </section>
                    <section class="contact-section">
                        <label for="customerName">"Name (optional)"</label>
                        <input
                            id="customerName"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <label for="customerPhone">"Mobile number (optional)"</label>
                        <input
                            id="customerPhone"
                            type="tel"
                            placeholder="10-digit mobile number"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </section>
                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || !session.with(|s| s.can_submit())
                    >
                        {move || {
                            if busy() {
                                view! { <i class="fas fa-spinner fa-spin"></i> " Submitting..." }.into_any()
                            } else {
                                view! { <i class="fas fa-paper-plane"></i> " Submit Feedback" }.into_any()
                            }
                        }}
                    </button>
                    <div id="loadingSpinner" class=move || if busy() { "loading-spinner" } else { "loading-spinner hidden" }>
                        <div class="spinner"></div>
                    </div>
                </form>
            </Show>
        </div>
    }
}
