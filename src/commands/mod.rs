//! Document Store Command Wrappers
//!
//! Frontend bindings to the store bridge script, organized by domain.

mod catalog;
mod feedback;

use menu_core::{StoreConfig, StoreError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(module = "/js/store_bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = connectStore, catch)]
    fn connect_store(config: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = watchCollection, catch)]
    fn watch_collection(
        path: &str,
        on_next: &Closure<dyn FnMut(JsValue)>,
        on_error: &Closure<dyn FnMut(String)>,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = appendDocument, catch)]
    async fn append_document(path: &str, record: JsValue) -> Result<JsValue, JsValue>;
}

/// Best-effort text for a rejected promise or thrown value
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Initialise the store client. Must run before any watch or write.
pub fn connect(config: &StoreConfig) -> Result<(), StoreError> {
    let value = serde_wasm_bindgen::to_value(config).map_err(|e| StoreError::Unavailable(e.to_string()))?;
    connect_store(value).map_err(|e| StoreError::Unavailable(js_error_message(&e)))?;
    tracing::info!(project = %config.project_id, "Document store connected");
    Ok(())
}

// Re-export all public items
pub use catalog::*;
pub use feedback::*;
