//! Custom tags and custom category documents.

use serde::{Deserialize, Serialize};

use super::document::RawDocument;

/// A restaurant-defined label, referenced from items by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTag {
    pub id: String,
    pub name: String,
}

impl CustomTag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Tags without a name fall back to their id so the chip is never blank.
    pub fn from_document(doc: &RawDocument) -> Self {
        let name = doc.text_field("name").unwrap_or_else(|| doc.id.clone());
        Self::new(doc.id.clone(), name)
    }
}

/// Name of an explicit category document; unnamed documents are ignored.
pub fn category_name(doc: &RawDocument) -> Option<String> {
    doc.text_field("name")
}
