//! Menu & Feedback Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod feedback_page;
mod menu_page;
mod settings;
mod store;

use app::{App, Page};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match settings::load() {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("Invalid app config: {err}").into());
            return;
        }
    };

    if let Err(err) = console_logger::init_logger(env!("CARGO_PKG_NAME"), &config.log_level) {
        web_sys::console::warn_1(&format!("Logger not installed: {err}").into());
    }

    // Mount anyway; the pages show their own error states if the store is down
    if let Err(err) = commands::connect(&config.store) {
        tracing::error!(error = %err, "Document store unavailable");
    }

    let page = Page::detect();
    tracing::info!(?page, restaurant = %config.restaurant_id, "Mounting page");
    mount_to_body(move || view! { <App config=config page=page /> });
}
