//! Snapshot documents and events as delivered by the store bridge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// One schema-less document: its id plus the field map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        let data = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { id: id.into(), data }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// True when any of the keys holds a truthy value.
    pub fn any_truthy(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.field(key).is_some_and(truthy))
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.field(key).and_then(Value::as_bool)
    }

    /// Non-empty string, or a number rendered as text.
    pub fn text_field(&self, key: &str) -> Option<String> {
        match self.field(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn number_field(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(as_number)
    }

    /// String entries of an array field; anything else yields an empty list.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.field(key) {
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Document-store truthiness: `false`, `0`, `""` and `null` are falsy.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numbers, or strings that parse as numbers.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A full snapshot of one collection, or the subscription's failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotEvent<T> {
    Delivered(Vec<T>),
    Failed(StoreError),
}

impl<T> SnapshotEvent<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SnapshotEvent<U> {
        match self {
            SnapshotEvent::Delivered(docs) => SnapshotEvent::Delivered(docs.into_iter().map(f).collect()),
            SnapshotEvent::Failed(err) => SnapshotEvent::Failed(err),
        }
    }
}

/// Snapshot events of the three menu collections.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    Items(SnapshotEvent<RawDocument>),
    Categories(SnapshotEvent<RawDocument>),
    Tags(SnapshotEvent<RawDocument>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!("yes")));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!([])));
    }

    #[test]
    fn test_field_helpers() {
        let doc = RawDocument::new(
            "a",
            json!({ "price": "120", "serves": 2, "tags": ["hot", 3, "new"], "blank": "  " }),
        );
        assert_eq!(doc.number_field("price"), Some(120.0));
        assert_eq!(doc.text_field("serves").as_deref(), Some("2"));
        assert_eq!(doc.text_field("blank"), None);
        assert_eq!(doc.string_list("tags"), vec!["hot", "new"]);
        assert!(doc.string_list("missing").is_empty());
    }

    #[test]
    fn test_non_object_data_is_empty() {
        let doc = RawDocument::new("x", json!(42));
        assert!(doc.data.is_empty());
    }

    #[test]
    fn test_deserialize_bridge_shape() {
        let docs: Vec<RawDocument> =
            serde_json::from_value(json!([{ "id": "t1", "data": { "name": "Chef" } }, { "id": "t2" }])).unwrap();
        assert_eq!(docs[0].text_field("name").as_deref(), Some("Chef"));
        assert!(docs[1].data.is_empty());
    }
}
