//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use menu_core::feedback::Notice;
use menu_core::AppConfig;

/// Page-wide configuration and the notice stack
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Embedded settings, fixed for the page lifetime
    pub config: StoredValue<AppConfig>,
    /// Visible notices, oldest first, keyed by a running id
    pub notices: RwSignal<Vec<(u32, Notice)>>,
    next_notice_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
        }
    }

    /// Show a notice that expires on its own after the configured timeout
    pub fn notify(&self, notice: Notice) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        tracing::debug!(id, message = %notice.message, "Showing notice");
        self.notices.update(|list| list.push((id, notice)));

        let timeout_ms = self.config.with_value(|c| c.notice_timeout_ms);
        let ctx = *self;
        gloo_timers::callback::Timeout::new(timeout_ms, move || ctx.dismiss(id)).forget();
    }

    /// Remove a notice; a no-op if it is already gone
    pub fn dismiss(&self, id: u32) {
        self.notices.update(|list| list.retain(|(nid, _)| *nid != id));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
