//! Optional customer contact fields.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;

pub const ANONYMOUS: &str = "Anonymous";
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Ten-digit mobile number starting with 6-9.
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile pattern is valid"));

/// Matches after stripping every non-digit character.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    MOBILE_PATTERN.is_match(&digits)
}

/// Raw text of the two form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Trim both fields, validate a supplied phone, fill placeholders.
    pub fn resolve(&self) -> Result<CustomerInfo, FeedbackError> {
        let name = self.name.trim();
        let phone = self.phone.trim();

        if !phone.is_empty() && !is_valid_phone(phone) {
            return Err(FeedbackError::InvalidPhone(phone.to_string()));
        }

        Ok(CustomerInfo {
            name: if name.is_empty() { ANONYMOUS } else { name }.to_string(),
            phone: if phone.is_empty() { PHONE_NOT_PROVIDED } else { phone }.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_patterns() {
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("1234567890"));
        assert!(!is_valid_phone("98765432100"));
        assert!(is_valid_phone("987-654-3210"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_placeholders() {
        let info = ContactForm::new("   ", "").resolve().unwrap();
        assert_eq!(info.name, ANONYMOUS);
        assert_eq!(info.phone, PHONE_NOT_PROVIDED);
    }

    #[test]
    fn test_trimmed_values_kept() {
        let info = ContactForm::new("  Asha ", " 987-654-3210 ").resolve().unwrap();
        assert_eq!(info.name, "Asha");
        assert_eq!(info.phone, "987-654-3210");
    }

    #[test]
    fn test_bad_phone_rejected() {
        let err = ContactForm::new("Ravi", "12345").resolve().unwrap_err();
        assert_eq!(err, FeedbackError::InvalidPhone("12345".into()));
    }
}
