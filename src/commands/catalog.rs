//! Catalog Commands
//!
//! Live subscriptions to the menu, category and tag collections.

use std::rc::Rc;

use menu_core::catalog::{CatalogEvent, RawDocument, SnapshotEvent};
use menu_core::{AppConfig, StoreError};
use wasm_bindgen::prelude::*;

use super::{js_error_message, watch_collection};

type Wrap = fn(SnapshotEvent<RawDocument>) -> CatalogEvent;

fn watch(path: String, wrap: Wrap, sink: Rc<dyn Fn(CatalogEvent)>) -> Result<(), StoreError> {
    let next_sink = sink.clone();
    let next_path = path.clone();
    let on_next = Closure::<dyn FnMut(JsValue)>::new(move |docs: JsValue| {
        let event = match serde_wasm_bindgen::from_value::<Vec<RawDocument>>(docs) {
            Ok(docs) => SnapshotEvent::Delivered(docs),
            Err(e) => SnapshotEvent::Failed(StoreError::Decode(format!("{next_path}: {e}"))),
        };
        next_sink(wrap(event));
    });

    let error_path = path.clone();
    let on_error = Closure::<dyn FnMut(String)>::new(move |message: String| {
        sink(wrap(SnapshotEvent::Failed(StoreError::Subscription {
            path: error_path.clone(),
            message,
        })));
    });

    watch_collection(&path, &on_next, &on_error).map_err(|e| StoreError::Subscription {
        path: path.clone(),
        message: js_error_message(&e),
    })?;

    // Listeners stay registered for the page lifetime
    on_next.forget();
    on_error.forget();
    tracing::debug!(%path, "Watching collection");
    Ok(())
}

/// Subscribe to categories, custom tags and menu items.
///
/// Every snapshot (and every subscription failure) reaches `sink` as a
/// `CatalogEvent`, in delivery order.
pub fn subscribe_catalog(config: &AppConfig, sink: impl Fn(CatalogEvent) + 'static) {
    let sink: Rc<dyn Fn(CatalogEvent)> = Rc::new(sink);
    let feeds: [(String, Wrap); 3] = [
        (config.categories_path(), CatalogEvent::Categories),
        (config.custom_tags_path(), CatalogEvent::Tags),
        (config.menu_items_path(), CatalogEvent::Items),
    ];

    for (path, wrap) in feeds {
        if let Err(err) = watch(path, wrap, sink.clone()) {
            tracing::error!(error = %err, "Failed to subscribe");
            sink(wrap(SnapshotEvent::Failed(err)));
        }
    }
}
