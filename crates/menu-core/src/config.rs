//! Application Config
//!
//! Settings are embedded into the bundle as JSON; every field except the
//! store connection has a default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Firestore web client settings, passed verbatim to the JS bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: Option<String>,
    #[serde(default)]
    pub messaging_sender_id: Option<String>,
    pub app_id: String,
    #[serde(default)]
    pub measurement_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub store: StoreConfig,
    #[serde(default = "default_restaurant_id")]
    pub restaurant_id: String,
    #[serde(default = "default_feedback_collection")]
    pub feedback_collection: String,
    /// How long a notice stays on screen unless closed.
    #[serde(default = "default_delay_ms")]
    pub notice_timeout_ms: u32,
    /// Delay between the thank-you view and the "submit another?" prompt.
    #[serde(default = "default_delay_ms")]
    pub restart_prompt_delay_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Category chips listed first, in this order, when present.
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
}

fn default_restaurant_id() -> String {
    "restaurant_1".to_string()
}

fn default_feedback_collection() -> String {
    "restaurant_feedback".to_string()
}

fn default_delay_ms() -> u32 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_categories() -> Vec<String> {
    ["starters", "mains (veg)", "desserts", "beverages"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.project_id.trim().is_empty() {
            return Err(ConfigError::Empty("store.projectId"));
        }
        if self.restaurant_id.trim().is_empty() {
            return Err(ConfigError::Empty("restaurantId"));
        }
        if self.feedback_collection.trim().is_empty() {
            return Err(ConfigError::Empty("feedbackCollection"));
        }
        Ok(())
    }

    fn restaurant_path(&self, collection: &str) -> String {
        format!("restaurants/{}/{}", self.restaurant_id, collection)
    }

    pub fn menu_items_path(&self) -> String {
        self.restaurant_path("menu_items")
    }

    pub fn categories_path(&self) -> String {
        self.restaurant_path("categories")
    }

    pub fn custom_tags_path(&self) -> String {
        self.restaurant_path("custom_tags")
    }
}
