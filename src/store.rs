//! Menu Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session is
//! the single source of truth; everything on screen is derived from it.

use leptos::prelude::*;
use menu_core::catalog::{CatalogEvent, MenuFilter, MenuSession};
use reactive_stores::Store;

/// Menu page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Snapshot cache, filter and search term
    pub session: MenuSession,
    /// Item shown in the detail overlay
    pub open_item: Option<String>,
    /// Whether the suggestion dropdown is shown
    pub suggestions_open: bool,
}

impl MenuState {
    pub fn new(default_categories: Vec<String>) -> Self {
        Self {
            session: MenuSession::new(default_categories),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read the session, tracking it
pub fn with_session<T>(store: &MenuStore, f: impl FnOnce(&MenuSession) -> T) -> T {
    f(&store.session().read())
}

/// Feed one snapshot event through the session reducer
pub fn store_apply_event(store: &MenuStore, event: CatalogEvent) {
    store.session().write().apply(event);
}

pub fn store_set_filter(store: &MenuStore, filter: MenuFilter) {
    tracing::debug!(filter = filter.key(), "Filter changed");
    store.session().write().set_filter(filter);
}

/// Update the search term and reopen suggestions
pub fn store_set_search(store: &MenuStore, term: &str) {
    store.session().write().set_search(term);
    store.suggestions_open().set(true);
}

/// Use a suggestion as the search term; returns the item name
pub fn store_choose_suggestion(store: &MenuStore, item_id: &str) -> Option<String> {
    let name = store.session().write().choose_suggestion(item_id);
    store.suggestions_open().set(false);
    name
}

pub fn store_suggestions_open(store: &MenuStore) -> bool {
    store.suggestions_open().get()
}

pub fn store_open_item(store: &MenuStore, item_id: String) {
    store.open_item().set(Some(item_id));
}

pub fn store_close_item(store: &MenuStore) {
    store.open_item().set(None);
}

pub fn store_open_item_id(store: &MenuStore) -> Option<String> {
    store.open_item().get()
}
