//! Detail overlay content for a single item.

use super::badges::{badges_for, Badge};
use super::item::MenuItem;
use super::price::format_amount;
use super::tag::CustomTag;

pub const DEFAULT_DESCRIPTION: &str = "Delicious dish prepared with care";
pub const DEFAULT_SERVES: &str = "1";
pub const DEFAULT_NUTRITIONAL_NOTE: &str =
    "Images shown are for illustration only; actual dish may vary.";
const PRICE_MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub badges: Vec<Badge>,
    pub serves: String,
    pub nutritional_note: String,
    /// `None` hides the image element.
    pub image_url: Option<String>,
    pub price_half: String,
    pub price_full: String,
}

impl ItemDetail {
    pub fn build(item: &MenuItem, custom_tags: &[CustomTag]) -> Self {
        let price_text = |amount: Option<f64>| {
            amount
                .map(format_amount)
                .unwrap_or_else(|| PRICE_MISSING.to_string())
        };

        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            badges: badges_for(item, custom_tags),
            serves: item.serves.clone().unwrap_or_else(|| DEFAULT_SERVES.to_string()),
            nutritional_note: item
                .nutritional_info
                .clone()
                .unwrap_or_else(|| DEFAULT_NUTRITIONAL_NOTE.to_string()),
            image_url: item.image_url.clone(),
            price_half: price_text(item.detail_prices.half),
            price_full: price_text(item.detail_prices.full),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawDocument;
    use serde_json::json;

    #[test]
    fn test_fallbacks() {
        let item = MenuItem::from_document(&RawDocument::new("1", json!({ "name": "Dal", "price": 90 })));
        let detail = ItemDetail::build(&item, &[]);
        assert_eq!(detail.description, DEFAULT_DESCRIPTION);
        assert_eq!(detail.serves, "1");
        assert_eq!(detail.nutritional_note, DEFAULT_NUTRITIONAL_NOTE);
        assert_eq!(detail.image_url, None);
        assert_eq!(detail.price_half, "N/A");
        assert_eq!(detail.price_full, "₹90");
    }

    #[test]
    fn test_plate_prices() {
        let item = MenuItem::from_document(&RawDocument::new(
            "2",
            json!({
                "name": "Biryani",
                "serves": 2,
                "imageUrl": "https://img/biryani.jpg",
                "plateSizes": { "half": { "price": 120, "available": true }, "full": { "available": true } }
            }),
        ));
        let detail = ItemDetail::build(&item, &[]);
        assert_eq!(detail.price_half, "₹120");
        assert_eq!(detail.price_full, "N/A");
        assert_eq!(detail.serves, "2");
        assert_eq!(detail.image_url.as_deref(), Some("https://img/biryani.jpg"));
    }

    #[test]
    fn test_full_price_prefers_listed_amount_over_plates() {
        let item = MenuItem::from_document(&RawDocument::new(
            "3",
            json!({
                "name": "Thali",
                "priceFull": 250,
                "plateSizes": { "full": { "price": 300, "available": true } }
            }),
        ));
        let detail = ItemDetail::build(&item, &[]);
        assert_eq!(detail.price_full, "₹250");
        assert_eq!(detail.price_half, "N/A");
    }
}
