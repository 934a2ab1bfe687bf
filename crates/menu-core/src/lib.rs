//! Menu Core
//!
//! Domain layer shared by the menu viewer and the feedback collector:
//! - catalog: menu documents, snapshot cache, filters and derived views
//! - feedback: ratings, the submitted record and the submission flow
//! - config: embedded application settings
//!
//! This crate has no browser dependencies and is tested natively.

pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;

pub use config::{AppConfig, StoreConfig};
pub use error::{ConfigError, FeedbackError, StoreError};
