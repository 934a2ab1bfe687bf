//! Badges shown next to an item's name.

use super::capitalize;
use super::item::{Diet, MenuItem};
use super::tag::CustomTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Recommended,
    Bestseller,
    New,
    Spicy,
    Veg,
    NonVeg,
    Tag,
    CustomTag,
}

impl BadgeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeKind::Recommended => "chef-special",
            BadgeKind::Bestseller => "bestseller",
            BadgeKind::New => "new-item",
            BadgeKind::Spicy => "spicy",
            BadgeKind::Veg => "veg",
            BadgeKind::NonVeg => "non-veg",
            BadgeKind::Tag => "tag",
            BadgeKind::CustomTag => "custom-tag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: String,
    /// Filter key the badge corresponds to, for tag badges.
    pub filter_key: Option<String>,
}

impl Badge {
    fn fixed(kind: BadgeKind, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            filter_key: None,
        }
    }
}

/// Flags first, then diet, then labels. Custom tag ids that no longer
/// resolve are skipped.
pub fn badges_for(item: &MenuItem, custom_tags: &[CustomTag]) -> Vec<Badge> {
    let mut badges = Vec::new();
    let flags = &item.flags;

    if flags.recommended {
        badges.push(Badge::fixed(BadgeKind::Recommended, "Recommended"));
    }
    if flags.bestseller {
        badges.push(Badge::fixed(BadgeKind::Bestseller, "Bestseller"));
    }
    if flags.new {
        badges.push(Badge::fixed(BadgeKind::New, "✨ New"));
    }
    if flags.spicy {
        badges.push(Badge::fixed(BadgeKind::Spicy, "Spicy"));
    }
    match item.diet() {
        Diet::Veg => badges.push(Badge::fixed(BadgeKind::Veg, "Veg")),
        Diet::NonVeg => badges.push(Badge::fixed(BadgeKind::NonVeg, "Non-Veg")),
        Diet::Unspecified => {}
    }

    for tag in &item.tags {
        badges.push(Badge {
            kind: BadgeKind::Tag,
            label: capitalize(tag),
            filter_key: Some(tag.clone()),
        });
    }

    for tag_id in &item.custom_tags {
        if let Some(tag) = custom_tags.iter().find(|t| &t.id == tag_id) {
            badges.push(Badge {
                kind: BadgeKind::CustomTag,
                label: tag.name.clone(),
                filter_key: Some(tag.id.clone()),
            });
        }
    }

    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawDocument;
    use serde_json::json;

    #[test]
    fn test_badge_order_and_labels() {
        let item = MenuItem::from_document(&RawDocument::new(
            "1",
            json!({
                "isRecommended": true,
                "newItem": true,
                "vegetarian": true,
                "tags": ["tangy"],
                "customTags": ["t1", "gone"]
            }),
        ));
        let tags = vec![CustomTag::new("t1", "House Special")];
        let labels: Vec<_> = badges_for(&item, &tags).into_iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Recommended", "✨ New", "Veg", "Tangy", "House Special"]);
    }

    #[test]
    fn test_veg_badge_preferred_over_non_veg() {
        let item = MenuItem::from_document(&RawDocument::new(
            "1",
            json!({ "vegetarian": false, "isVegetarian": true }),
        ));
        let labels: Vec<_> = badges_for(&item, &[]).into_iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Veg"]);
    }

    #[test]
    fn test_no_badges() {
        let item = MenuItem::from_document(&RawDocument::new("1", json!({ "name": "Plain rice" })));
        assert!(badges_for(&item, &[]).is_empty());
    }
}
