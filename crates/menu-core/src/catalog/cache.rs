//! Menu Cache
//!
//! Available items grouped by category, in first-seen order. A cache is
//! only ever built whole from one snapshot and is never patched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::item::MenuItem;

pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuCache {
    groups: Vec<CategoryGroup>,
}

impl MenuCache {
    /// Build a cache from one complete snapshot.
    ///
    /// Unavailable items are dropped. Ids are unique across the cache:
    /// the first occurrence of an id is kept and later ones are discarded.
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut seen = HashSet::new();

        for item in items {
            if !item.available {
                continue;
            }
            if !seen.insert(item.id.clone()) {
                tracing::warn!(id = %item.id, name = %item.name, "Duplicate menu item id, keeping first");
                continue;
            }
            match groups.iter_mut().find(|g| g.name == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    name: item.category.clone(),
                    items: vec![item],
                }),
            }
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Every cached item, category by category.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawDocument;
    use serde_json::json;

    fn item(id: &str, data: serde_json::Value) -> MenuItem {
        MenuItem::from_document(&RawDocument::new(id, data))
    }

    #[test]
    fn test_unavailable_items_excluded() {
        let cache = MenuCache::from_items(vec![
            item("1", json!({ "category": "mains", "available": true })),
            item("2", json!({ "category": "mains", "available": false })),
        ]);
        assert_eq!(cache.groups().len(), 1);
        assert_eq!(cache.groups()[0].name, "mains");
        let ids: Vec<_> = cache.groups()[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_missing_category_grouped_as_uncategorized() {
        let cache = MenuCache::from_items(vec![item("1", json!({ "name": "Tea" }))]);
        assert_eq!(cache.category_names().collect::<Vec<_>>(), vec![UNCATEGORIZED]);
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let cache = MenuCache::from_items(vec![
            item("1", json!({ "category": "desserts" })),
            item("2", json!({ "category": "starters" })),
            item("3", json!({ "category": "desserts" })),
        ]);
        assert_eq!(cache.category_names().collect::<Vec<_>>(), vec!["desserts", "starters"]);
        assert_eq!(cache.len(), 3);
        let order: Vec<_> = cache.items().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["1", "3", "2"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let cache = MenuCache::from_items(vec![
            item("dup", json!({ "name": "First", "category": "a" })),
            item("dup", json!({ "name": "Second", "category": "b" })),
        ]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.find("dup").map(|i| i.name.as_str()), Some("First"));
        assert_eq!(cache.category_names().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_empty_cache() {
        let cache = MenuCache::default();
        assert!(cache.is_empty());
        assert!(cache.find("x").is_none());
    }
}
