//! Error types for store access, feedback submission and configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the remote document store.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Subscription to {path} failed: {message}")]
    Subscription { path: String, message: String },

    #[error("Write to {path} failed: {message}")]
    Write { path: String, message: String },

    #[error("Malformed snapshot: {0}")]
    Decode(String),
}

/// Reasons a feedback submission does not reach the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedbackError {
    #[error("Please provide at least one rating before submitting.")]
    NoRatings,

    #[error("Please enter a valid mobile number")]
    InvalidPhone(String),

    #[error("A submission is already in progress")]
    Busy,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config field '{0}' must not be empty")]
    Empty(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent() {
        let store = FeedbackError::from(StoreError::Unavailable("offline".into()));
        assert!(matches!(store, FeedbackError::Store(_)));
        assert_eq!(store.to_string(), "Store unavailable: offline");
    }
}
