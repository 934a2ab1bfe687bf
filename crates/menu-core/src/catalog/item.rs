//! Menu Item Entity
//!
//! The canonical item record. Documents written by different versions of
//! the admin tooling use several property names for the same flag; they
//! are collapsed here, once, so nothing downstream knows about aliases.

use serde::{Deserialize, Serialize};

use super::cache::UNCATEGORIZED;
use super::document::RawDocument;
use super::price::{DetailPrices, Price};

/// Marker shown next to an item. Veg wins when a document carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Veg,
    NonVeg,
    #[default]
    Unspecified,
}

/// Boolean attributes, one field per meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemFlags {
    pub spicy: bool,
    pub mild_spicy: bool,
    pub sweet: bool,
    pub refreshing: bool,
    pub cold: bool,
    pub hot: bool,
    pub recommended: bool,
    pub bestseller: bool,
    pub new: bool,
}

impl ItemFlags {
    fn from_document(doc: &RawDocument) -> Self {
        Self {
            spicy: doc.any_truthy(&["isSpicy", "spicy"]),
            mild_spicy: doc.any_truthy(&["isMildSpicy", "mildSpicy"]),
            sweet: doc.any_truthy(&["isSweet", "sweet"]),
            refreshing: doc.any_truthy(&["isRefreshing", "refreshing"]),
            cold: doc.any_truthy(&["isCold", "cold"]),
            hot: doc.any_truthy(&["isHot", "hot"]),
            recommended: doc.any_truthy(&["recommended", "isRecommended"]),
            bestseller: doc.any_truthy(&["bestSeller", "bestseller", "isBestseller"]),
            new: doc.any_truthy(&["newItem", "isNew"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub available: bool,
    pub price: Price,
    pub detail_prices: DetailPrices,
    /// `vegetarian == true` or a truthy `isVegetarian`.
    pub veg: bool,
    /// `vegetarian == false` or a truthy `isNonVegetarian`.
    pub non_veg: bool,
    pub flags: ItemFlags,
    /// Free-form labels.
    pub tags: Vec<String>,
    /// Ids into the custom tag collection.
    pub custom_tags: Vec<String>,
    pub image_url: Option<String>,
    pub serves: Option<String>,
    pub nutritional_info: Option<String>,
    pub priority: Option<f64>,
}

impl MenuItem {
    pub fn from_document(doc: &RawDocument) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.text_field("name").unwrap_or_default(),
            description: doc.text_field("description"),
            category: doc
                .text_field("category")
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            // Only an explicit `false` hides an item.
            available: doc.bool_field("available") != Some(false),
            price: Price::from_document(doc),
            detail_prices: DetailPrices::from_document(doc),
            veg: doc.bool_field("vegetarian") == Some(true) || doc.any_truthy(&["isVegetarian"]),
            non_veg: doc.bool_field("vegetarian") == Some(false) || doc.any_truthy(&["isNonVegetarian"]),
            flags: ItemFlags::from_document(doc),
            tags: doc.string_list("tags"),
            custom_tags: doc.string_list("customTags"),
            image_url: doc.text_field("imageUrl"),
            serves: doc.text_field("serves"),
            nutritional_info: doc.text_field("nutritionalInfo"),
            priority: doc.number_field("priority"),
        }
    }

    /// Each alias set is checked on its own, so a document may be both.
    pub fn is_veg(&self) -> bool {
        self.veg
    }

    pub fn is_non_veg(&self) -> bool {
        self.non_veg
    }

    pub fn diet(&self) -> Diet {
        if self.veg {
            Diet::Veg
        } else if self.non_veg {
            Diet::NonVeg
        } else {
            Diet::Unspecified
        }
    }

    /// Shown in the recommendations strip when the item carries any
    /// promotional flag or label.
    pub fn is_featured(&self) -> bool {
        self.flags.recommended
            || self.flags.bestseller
            || self.flags.new
            || !self.tags.is_empty()
            || !self.custom_tags.is_empty()
    }

    /// Highlighted in listings.
    pub fn is_high_priority(&self) -> bool {
        self.priority.is_some_and(|p| p > 7.0)
    }

    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn item(data: Value) -> MenuItem {
        MenuItem::from_document(&RawDocument::new("i1", data))
    }

    #[test]
    fn test_defaults() {
        let item = item(json!({ "name": "Lassi" }));
        assert_eq!(item.category, UNCATEGORIZED);
        assert!(item.available);
        assert_eq!(item.diet(), Diet::Unspecified);
        assert!(!item.is_featured());
    }

    #[test]
    fn test_explicit_unavailable() {
        assert!(!item(json!({ "available": false })).available);
        assert!(item(json!({ "available": "no" })).available);
    }

    #[test]
    fn test_diet_aliases() {
        assert!(item(json!({ "vegetarian": true })).is_veg());
        assert!(item(json!({ "isVegetarian": true })).is_veg());
        assert!(item(json!({ "vegetarian": false })).is_non_veg());
        assert!(item(json!({ "isNonVegetarian": 1 })).is_non_veg());
    }

    #[test]
    fn test_conflicting_diet_aliases_keep_both() {
        let a = item(json!({ "vegetarian": false, "isVegetarian": true }));
        assert!(a.is_veg() && a.is_non_veg());
        assert_eq!(a.diet(), Diet::Veg);

        let b = item(json!({ "vegetarian": true, "isNonVegetarian": true }));
        assert!(b.is_veg() && b.is_non_veg());
        assert_eq!(b.diet(), Diet::Veg);

        let c = item(json!({ "vegetarian": "yes" }));
        assert_eq!(c.diet(), Diet::Unspecified);
    }

    #[test]
    fn test_flag_aliases() {
        let a = item(json!({ "bestSeller": true, "isSpicy": true, "isNew": true }));
        let b = item(json!({ "isBestseller": true, "spicy": "yes", "newItem": true }));
        assert_eq!(a.flags, b.flags);
        assert!(a.flags.bestseller && a.flags.spicy && a.flags.new);
        assert!(a.is_featured());
    }

    #[test]
    fn test_featured_by_tags() {
        assert!(item(json!({ "tags": ["chef"] })).is_featured());
        assert!(item(json!({ "customTags": ["t1"] })).is_featured());
        assert!(!item(json!({ "tags": [] })).is_featured());
    }

    #[test]
    fn test_search_match() {
        let it = item(json!({ "name": "Paneer Tikka", "description": "Smoky COTTAGE cheese" }));
        assert!(it.matches_search("tikka"));
        assert!(it.matches_search("cottage"));
        assert!(!it.matches_search("chicken"));
        assert!(it.matches_search(""));
    }

    #[test]
    fn test_priority() {
        assert!(item(json!({ "priority": 8 })).is_high_priority());
        assert!(!item(json!({ "priority": 7 })).is_high_priority());
        assert!(!item(json!({})).is_high_priority());
    }
}
