//! Feedback Commands
//!
//! Appends feedback records to the store.

use async_trait::async_trait;
use leptos::prelude::window;
use menu_core::feedback::{ClientContext, FeedbackRecord, FeedbackWriter};
use menu_core::StoreError;

use super::{append_document, js_error_message};

/// Writes each record as a new document in one collection
#[derive(Debug, Clone)]
pub struct StoreFeedbackWriter {
    path: String,
}

impl StoreFeedbackWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl FeedbackWriter for StoreFeedbackWriter {
    async fn append(&self, record: &FeedbackRecord) -> Result<(), StoreError> {
        let write_error = |message: String| StoreError::Write {
            path: self.path.clone(),
            message,
        };
        let value = serde_wasm_bindgen::to_value(record).map_err(|e| write_error(e.to_string()))?;
        let id = append_document(&self.path, value)
            .await
            .map_err(|e| write_error(js_error_message(&e)))?;
        tracing::info!(path = %self.path, id = ?id.as_string(), "Feedback document added");
        Ok(())
    }
}

/// Local wall clock and user agent at the moment of submission
pub fn client_context() -> ClientContext {
    ClientContext {
        now: chrono::Local::now().fixed_offset(),
        user_agent: window().navigator().user_agent().unwrap_or_default(),
    }
}
