//! Menu Page
//!
//! Subscribes to the catalog once and lays out the menu views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    CategoryNav, FilterBar, ItemModal, MenuListing, Recommendations, ScrollProgress, SearchBar,
    ThemeToggle,
};
use crate::context::use_app_context;
use crate::store::{store_apply_event, MenuState};

#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config.get_value();

    let store = Store::new(MenuState::new(config.default_categories.clone()));
    provide_context(store);

    commands::subscribe_catalog(&config, move |event| store_apply_event(&store, event));

    view! {
        <ScrollProgress />
        <header class="menu-header">
            <h1>"Our Menu"</h1>
            <ThemeToggle />
        </header>
        <main class="menu-page">
            <SearchBar />
            <FilterBar />
            <CategoryNav />
            <Recommendations />
            <MenuListing />
        </main>
        <ItemModal />
    }
}
