//! Embedded settings.

use menu_core::{AppConfig, ConfigError};

const APP_CONFIG: &str = include_str!("../config/app.json");

pub fn load() -> Result<AppConfig, ConfigError> {
    AppConfig::from_json(APP_CONFIG)
}
