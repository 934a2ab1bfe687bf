//! Menu Filters
//!
//! The active filter chip: everything, one of the fixed named predicates,
//! or a label matched against an item's free-form tags and custom tag ids.

use serde::{Deserialize, Serialize};

use super::item::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedFilter {
    Veg,
    NonVeg,
    Spicy,
    MildSpicy,
    Sweet,
    Refreshing,
    Cold,
    Hot,
    Recommended,
    Bestseller,
    New,
}

impl NamedFilter {
    pub const ALL: [NamedFilter; 11] = [
        NamedFilter::Veg,
        NamedFilter::NonVeg,
        NamedFilter::Spicy,
        NamedFilter::MildSpicy,
        NamedFilter::Sweet,
        NamedFilter::Refreshing,
        NamedFilter::Cold,
        NamedFilter::Hot,
        NamedFilter::Recommended,
        NamedFilter::Bestseller,
        NamedFilter::New,
    ];

    /// Chip key, as used in `data-filter` attributes.
    pub fn key(&self) -> &'static str {
        match self {
            NamedFilter::Veg => "veg",
            NamedFilter::NonVeg => "non-veg",
            NamedFilter::Spicy => "spicy",
            NamedFilter::MildSpicy => "mildSpicy",
            NamedFilter::Sweet => "sweet",
            NamedFilter::Refreshing => "refreshing",
            NamedFilter::Cold => "cold",
            NamedFilter::Hot => "hot",
            NamedFilter::Recommended => "recommended",
            NamedFilter::Bestseller => "bestseller",
            NamedFilter::New => "new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NamedFilter::Veg => "Veg",
            NamedFilter::NonVeg => "Non-Veg",
            NamedFilter::Spicy => "Spicy",
            NamedFilter::MildSpicy => "Mild Spicy",
            NamedFilter::Sweet => "Sweet",
            NamedFilter::Refreshing => "Refreshing",
            NamedFilter::Cold => "Cold",
            NamedFilter::Hot => "Hot",
            NamedFilter::Recommended => "Recommended",
            NamedFilter::Bestseller => "Bestseller",
            NamedFilter::New => "New",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let flags = &item.flags;
        match self {
            NamedFilter::Veg => item.is_veg(),
            NamedFilter::NonVeg => item.is_non_veg(),
            NamedFilter::Spicy => flags.spicy,
            NamedFilter::MildSpicy => flags.mild_spicy,
            NamedFilter::Sweet => flags.sweet,
            NamedFilter::Refreshing => flags.refreshing,
            NamedFilter::Cold => flags.cold,
            NamedFilter::Hot => flags.hot,
            NamedFilter::Recommended => flags.recommended,
            NamedFilter::Bestseller => flags.bestseller,
            NamedFilter::New => flags.new,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuFilter {
    #[default]
    All,
    Named(NamedFilter),
    /// A free-form tag or a custom tag id.
    Label(String),
}

impl MenuFilter {
    pub fn from_key(key: &str) -> Self {
        if key == "all" {
            return MenuFilter::All;
        }
        match NamedFilter::from_key(key) {
            Some(named) => MenuFilter::Named(named),
            None => MenuFilter::Label(key.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            MenuFilter::All => "all",
            MenuFilter::Named(named) => named.key(),
            MenuFilter::Label(label) => label,
        }
    }

    /// A named predicate is final: it does not fall through to tag matching.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Named(named) => named.matches(item),
            MenuFilter::Label(label) => {
                item.tags.iter().any(|t| t == label) || item.custom_tags.iter().any(|t| t == label)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawDocument;
    use serde_json::{json, Value};

    fn item(data: Value) -> MenuItem {
        MenuItem::from_document(&RawDocument::new("i", data))
    }

    #[test]
    fn test_key_round_trip() {
        for named in NamedFilter::ALL {
            assert_eq!(MenuFilter::from_key(named.key()), MenuFilter::Named(named));
        }
        assert_eq!(MenuFilter::from_key("all"), MenuFilter::All);
        assert_eq!(MenuFilter::from_key("tag_42"), MenuFilter::Label("tag_42".into()));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(MenuFilter::All.matches(&item(json!({}))));
        assert!(MenuFilter::All.matches(&item(json!({ "vegetarian": false }))));
    }

    #[test]
    fn test_veg_under_any_alias() {
        let veg = MenuFilter::from_key("veg");
        assert!(veg.matches(&item(json!({ "vegetarian": true }))));
        assert!(veg.matches(&item(json!({ "isVegetarian": true }))));
        assert!(!veg.matches(&item(json!({ "vegetarian": false }))));
        assert!(!veg.matches(&item(json!({}))));
    }

    #[test]
    fn test_conflicting_diet_aliases_match_both_filters() {
        let veg = MenuFilter::from_key("veg");
        let non_veg = MenuFilter::from_key("non-veg");

        let marked_veg = item(json!({ "vegetarian": false, "isVegetarian": true }));
        assert!(veg.matches(&marked_veg));
        assert!(non_veg.matches(&marked_veg));

        let marked_non_veg = item(json!({ "vegetarian": true, "isNonVegetarian": true }));
        assert!(veg.matches(&marked_non_veg));
        assert!(non_veg.matches(&marked_non_veg));
    }

    #[test]
    fn test_named_filter_does_not_fall_through_to_tags() {
        let spicy = MenuFilter::from_key("spicy");
        assert!(!spicy.matches(&item(json!({ "tags": ["spicy"] }))));
        assert!(spicy.matches(&item(json!({ "isSpicy": true }))));
    }

    #[test]
    fn test_label_matches_tags_and_custom_tags() {
        let label = MenuFilter::from_key("chef");
        assert!(label.matches(&item(json!({ "tags": ["chef"] }))));
        assert!(label.matches(&item(json!({ "customTags": ["chef"] }))));
        assert!(!label.matches(&item(json!({ "tags": ["chefs"] }))));
    }
}
