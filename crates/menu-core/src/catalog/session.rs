//! Menu Session
//!
//! View-model for one menu page: the three collection slices, the
//! transient filter/search state, and every derived view.
//!
//! `apply` is the only way snapshot data enters the session. Each event
//! owns exactly one slice and replaces it wholesale, so events from the
//! three subscriptions may arrive in any order.

use crate::error::StoreError;

use super::badges::{badges_for, Badge};
use super::cache::{CategoryGroup, MenuCache};
use super::capitalize;
use super::detail::ItemDetail;
use super::document::{CatalogEvent, SnapshotEvent};
use super::filter::{MenuFilter, NamedFilter};
use super::item::MenuItem;
use super::tag::{category_name, CustomTag};

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_SUGGESTIONS: usize = 5;
pub const MIN_SUGGESTION_CHARS: usize = 2;

pub const FEED_ERROR_MESSAGE: &str = "Error loading menu items. Please try again later.";
pub const NO_RESULTS_MESSAGE: &str = "No menu items found matching your criteria.";

/// State of the items subscription.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedStatus {
    #[default]
    Loading,
    Ready,
    Failed(StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: String,
    pub label: String,
    /// Chips created from the custom tag collection.
    pub custom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    /// Category name, also the id of its listing section.
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuSession {
    cache: MenuCache,
    custom_categories: Vec<String>,
    custom_tags: Vec<CustomTag>,
    default_categories: Vec<String>,
    active_filter: MenuFilter,
    search_term: String,
    status: FeedStatus,
}

impl MenuSession {
    pub fn new(default_categories: Vec<String>) -> Self {
        Self {
            default_categories,
            ..Default::default()
        }
    }

    // ========================
    // Snapshot reducer
    // ========================

    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Items(SnapshotEvent::Delivered(docs)) => {
                let cache = MenuCache::from_items(docs.iter().map(MenuItem::from_document));
                tracing::debug!(
                    documents = docs.len(),
                    cached = cache.len(),
                    categories = cache.groups().len(),
                    "Menu items snapshot applied"
                );
                self.cache = cache;
                self.status = FeedStatus::Ready;
            }
            CatalogEvent::Items(SnapshotEvent::Failed(err)) => {
                tracing::error!(error = %err, "Menu items subscription failed");
                self.status = FeedStatus::Failed(err);
            }
            CatalogEvent::Categories(SnapshotEvent::Delivered(docs)) => {
                self.custom_categories = docs.iter().filter_map(category_name).collect();
                tracing::debug!(count = self.custom_categories.len(), "Custom categories snapshot applied");
            }
            CatalogEvent::Categories(SnapshotEvent::Failed(err)) => {
                tracing::error!(error = %err, "Categories subscription failed");
            }
            CatalogEvent::Tags(SnapshotEvent::Delivered(docs)) => {
                self.custom_tags = docs.iter().map(CustomTag::from_document).collect();
                tracing::debug!(count = self.custom_tags.len(), "Custom tags snapshot applied");
            }
            CatalogEvent::Tags(SnapshotEvent::Failed(err)) => {
                tracing::error!(error = %err, "Custom tags subscription failed");
            }
        }
    }

    /// Apply a sequence of events in order.
    #[cfg(test)]
    pub(crate) fn replay(&mut self, events: impl IntoIterator<Item = CatalogEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn apply_items(&mut self, docs: Vec<super::document::RawDocument>) {
        self.apply(CatalogEvent::Items(SnapshotEvent::Delivered(docs)));
    }

    // ========================
    // Transient UI state
    // ========================

    pub fn set_filter(&mut self, filter: MenuFilter) {
        self.active_filter = filter;
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }

    /// Pick a suggestion: its name becomes the search term.
    pub fn choose_suggestion(&mut self, id: &str) -> Option<String> {
        let name = self.cache.find(id)?.name.clone();
        self.set_search(&name);
        Some(name)
    }

    pub fn cache(&self) -> &MenuCache {
        &self.cache
    }

    pub fn custom_tags(&self) -> &[CustomTag] {
        &self.custom_tags
    }

    pub fn active_filter(&self) -> &MenuFilter {
        &self.active_filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    // ========================
    // Derived views
    // ========================

    fn visible(&self, item: &MenuItem) -> bool {
        self.active_filter.matches(item) && item.matches_search(&self.search_term)
    }

    /// Filtered and searched listing; categories left empty are omitted.
    pub fn listing(&self) -> Vec<CategoryGroup> {
        self.cache
            .groups()
            .iter()
            .filter_map(|group| {
                let items: Vec<MenuItem> = group
                    .items
                    .iter()
                    .filter(|item| self.visible(item))
                    .cloned()
                    .collect();
                (!items.is_empty()).then(|| CategoryGroup {
                    name: group.name.clone(),
                    items,
                })
            })
            .collect()
    }

    /// Message to show in place of the listing, if any.
    pub fn empty_state(&self) -> Option<&'static str> {
        match &self.status {
            FeedStatus::Loading => None,
            FeedStatus::Failed(_) => Some(FEED_ERROR_MESSAGE),
            FeedStatus::Ready if self.listing().is_empty() => Some(NO_RESULTS_MESSAGE),
            FeedStatus::Ready => None,
        }
    }

    /// Featured items passing the active filter, ignoring search, in cache order.
    pub fn recommendations(&self) -> Vec<MenuItem> {
        self.cache
            .items()
            .filter(|item| self.active_filter.matches(item) && item.is_featured())
            .take(MAX_RECOMMENDATIONS)
            .cloned()
            .collect()
    }

    /// Search-as-you-type suggestions; empty below two characters.
    pub fn suggestions(&self) -> Vec<MenuItem> {
        if self.search_term.chars().count() < MIN_SUGGESTION_CHARS {
            return Vec::new();
        }
        self.cache
            .items()
            .filter(|item| self.visible(item))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    /// Cached and explicit categories; configured defaults lead.
    pub fn category_chips(&self) -> Vec<CategoryChip> {
        let mut present: Vec<&str> = Vec::new();
        for name in self
            .cache
            .category_names()
            .chain(self.custom_categories.iter().map(String::as_str))
        {
            if !present.contains(&name) {
                present.push(name);
            }
        }

        let defaults = self
            .default_categories
            .iter()
            .map(String::as_str)
            .filter(|name| present.contains(name));
        let rest = present
            .iter()
            .copied()
            .filter(|name| !self.default_categories.iter().any(|d| d == name));

        defaults
            .chain(rest)
            .map(|name| CategoryChip {
                name: name.to_string(),
                label: capitalize(name),
            })
            .collect()
    }

    /// "All", the named predicates, then one chip per custom tag.
    pub fn filter_chips(&self) -> Vec<FilterChip> {
        let all = FilterChip {
            key: MenuFilter::All.key().to_string(),
            label: "All".to_string(),
            custom: false,
        };
        let named = NamedFilter::ALL.iter().map(|f| FilterChip {
            key: f.key().to_string(),
            label: f.label().to_string(),
            custom: false,
        });
        let custom = self.custom_tags.iter().map(|tag| FilterChip {
            key: tag.id.clone(),
            label: tag.name.clone(),
            custom: true,
        });
        std::iter::once(all).chain(named).chain(custom).collect()
    }

    pub fn badges(&self, item: &MenuItem) -> Vec<Badge> {
        badges_for(item, &self.custom_tags)
    }

    pub fn detail(&self, id: &str) -> Option<ItemDetail> {
        let found = self.cache.find(id);
        if found.is_none() {
            tracing::warn!(id, "Item not found for detail view");
        }
        found.map(|item| ItemDetail::build(item, &self.custom_tags))
    }
}
