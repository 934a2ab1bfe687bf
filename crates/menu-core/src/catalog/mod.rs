//! Catalog Layer
//!
//! Live menu data: raw documents are normalised once at ingestion into
//! canonical records, grouped into a snapshot cache, and every view the
//! menu page shows is derived from that cache on demand.

mod badges;
mod cache;
mod detail;
mod document;
mod filter;
mod item;
mod price;
mod session;
mod tag;

pub use badges::{badges_for, Badge, BadgeKind};
pub use cache::{CategoryGroup, MenuCache, UNCATEGORIZED};
pub use detail::{ItemDetail, DEFAULT_DESCRIPTION, DEFAULT_NUTRITIONAL_NOTE, DEFAULT_SERVES};
pub use document::{CatalogEvent, RawDocument, SnapshotEvent};
pub use filter::{MenuFilter, NamedFilter};
pub use item::{Diet, ItemFlags, MenuItem};
pub use price::{format_amount, DetailPrices, PlateOption, PlateSize, Price, PriceDisplay};
pub use session::{CategoryChip, FeedStatus, FilterChip, MenuSession, MAX_RECOMMENDATIONS, MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS};
pub use tag::{category_name, CustomTag};

/// Capitalise the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
