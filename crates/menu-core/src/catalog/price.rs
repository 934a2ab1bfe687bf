//! Item pricing: a flat price or per-plate-size prices.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{as_number, truthy, RawDocument};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateSize {
    pub price: Option<f64>,
    pub available: bool,
}

impl PlateSize {
    fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            price: map.get("price").and_then(as_number),
            available: map.get("available").is_some_and(truthy),
        })
    }

    fn legacy(price: f64) -> Self {
        Self { price: Some(price), available: true }
    }

    /// Price shown for this size, only when it is offered and priced.
    fn offered_price(&self) -> Option<f64> {
        if self.available { self.price } else { None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Price {
    Flat(f64),
    Plates {
        half: Option<PlateSize>,
        full: Option<PlateSize>,
    },
    #[default]
    Unpriced,
}

/// Half and full amounts for the detail overlay.
///
/// `priceHalf` / `priceFull` and a flat `price` come before `plateSizes`,
/// and a zero amount counts as unset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailPrices {
    pub half: Option<f64>,
    pub full: Option<f64>,
}

impl DetailPrices {
    pub fn from_document(doc: &RawDocument) -> Self {
        let set = |amount: Option<f64>| amount.filter(|a| *a != 0.0);
        let plate = |size: &str| {
            set(doc
                .field("plateSizes")
                .and_then(|plates| plates.get(size))
                .and_then(|plate| plate.get("price"))
                .and_then(as_number))
        };

        Self {
            half: set(doc.number_field("priceHalf")).or_else(|| plate("half")),
            full: set(doc.number_field("priceFull"))
                .or_else(|| set(doc.number_field("price")))
                .or_else(|| plate("full")),
        }
    }
}

/// A plate-size line in a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateOption {
    pub label: &'static str,
    pub amount: f64,
}

/// What the listing shows in the price slot.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceDisplay {
    Single(f64),
    Options(Vec<PlateOption>),
    NoSizesAvailable,
    NotAvailable,
}

impl Price {
    /// Resolve `plateSizes`, object- or number-valued `price`, and the legacy
    /// `priceHalf` / `priceFull` fields into one shape.
    pub fn from_document(doc: &RawDocument) -> Self {
        let plates = doc
            .field("plateSizes")
            .filter(|v| v.is_object())
            .or_else(|| doc.field("price").filter(|v| v.is_object()));
        let flat = doc.field("price").and_then(as_number);
        let legacy_half = doc.number_field("priceHalf").map(PlateSize::legacy);
        let legacy_full = doc.number_field("priceFull").map(PlateSize::legacy);

        if let Some(plates) = plates {
            let half = plates.get("half").and_then(PlateSize::from_value).or(legacy_half);
            let full = plates
                .get("full")
                .and_then(PlateSize::from_value)
                .or(legacy_full)
                .or(flat.map(PlateSize::legacy));
            return Price::Plates { half, full };
        }

        match (flat, legacy_half, legacy_full) {
            (Some(amount), None, None) => Price::Flat(amount),
            (flat, half, full) if half.is_some() || full.is_some() || flat.is_some() => Price::Plates {
                half,
                full: full.or(flat.map(PlateSize::legacy)),
            },
            _ => Price::Unpriced,
        }
    }

    pub fn half_price(&self) -> Option<f64> {
        match self {
            Price::Plates { half: Some(size), .. } => size.price,
            _ => None,
        }
    }

    pub fn full_price(&self) -> Option<f64> {
        match self {
            Price::Flat(amount) => Some(*amount),
            Price::Plates { full: Some(size), .. } => size.price,
            _ => None,
        }
    }

    /// Headline price for compact cards: flat, else full, else half.
    pub fn headline(&self) -> Option<f64> {
        self.full_price().or_else(|| self.half_price())
    }

    pub fn display(&self) -> PriceDisplay {
        match self {
            Price::Flat(amount) => PriceDisplay::Single(*amount),
            Price::Plates { half, full } => {
                let options: Vec<PlateOption> = [("Half Plate", half), ("Full Plate", full)]
                    .into_iter()
                    .filter_map(|(label, size)| {
                        size.as_ref().and_then(|s| s.offered_price()).map(|amount| PlateOption { label, amount })
                    })
                    .collect();
                if options.is_empty() {
                    PriceDisplay::NoSizesAvailable
                } else {
                    PriceDisplay::Options(options)
                }
            }
            Price::Unpriced => PriceDisplay::NotAvailable,
        }
    }
}

/// `₹120`, `₹99.5`.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{:.0}", amount)
    } else {
        format!("₹{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn price_of(data: serde_json::Value) -> Price {
        Price::from_document(&RawDocument::new("p", data))
    }

    #[test]
    fn test_flat_price() {
        let price = price_of(json!({ "price": 150 }));
        assert_eq!(price, Price::Flat(150.0));
        assert_eq!(price.full_price(), Some(150.0));
        assert_eq!(price.half_price(), None);
        assert_eq!(price.display(), PriceDisplay::Single(150.0));
    }

    #[test]
    fn test_plate_sizes() {
        let price = price_of(json!({
            "plateSizes": {
                "half": { "price": 80, "available": true },
                "full": { "price": 140, "available": false }
            }
        }));
        assert_eq!(price.half_price(), Some(80.0));
        assert_eq!(price.full_price(), Some(140.0));
        assert_eq!(
            price.display(),
            PriceDisplay::Options(vec![PlateOption { label: "Half Plate", amount: 80.0 }])
        );
    }

    #[test]
    fn test_price_object_is_plate_map() {
        let price = price_of(json!({ "price": { "full": { "price": "200", "available": true } } }));
        assert_eq!(price.full_price(), Some(200.0));
        assert_eq!(price.headline(), Some(200.0));
    }

    #[test]
    fn test_no_sizes_available() {
        let price = price_of(json!({ "plateSizes": { "half": { "price": 50, "available": false } } }));
        assert_eq!(price.display(), PriceDisplay::NoSizesAvailable);
    }

    #[test]
    fn test_legacy_half_and_full() {
        let price = price_of(json!({ "priceHalf": 60, "priceFull": 110 }));
        assert_eq!(price.half_price(), Some(60.0));
        assert_eq!(price.full_price(), Some(110.0));

        let mixed = price_of(json!({ "priceHalf": 60, "price": 100 }));
        assert_eq!(mixed.full_price(), Some(100.0));
        assert_eq!(mixed.half_price(), Some(60.0));
    }

    #[test]
    fn test_detail_prices_prefer_legacy_then_flat() {
        let doc = |data: Value| RawDocument::new("p", data);

        let legacy = DetailPrices::from_document(&doc(json!({
            "priceFull": 250,
            "plateSizes": { "full": { "price": 300, "available": true } }
        })));
        assert_eq!(legacy.full, Some(250.0));

        let flat = DetailPrices::from_document(&doc(json!({
            "price": 180,
            "plateSizes": { "half": { "price": 90 }, "full": { "price": 300 } }
        })));
        assert_eq!(flat, DetailPrices { half: Some(90.0), full: Some(180.0) });

        let plates_only = DetailPrices::from_document(&doc(json!({
            "priceHalf": 0,
            "plateSizes": { "half": { "price": 70 }, "full": { "price": 130 } }
        })));
        assert_eq!(plates_only, DetailPrices { half: Some(70.0), full: Some(130.0) });
    }

    #[test]
    fn test_unpriced() {
        let price = price_of(json!({ "name": "Water" }));
        assert_eq!(price, Price::Unpriced);
        assert_eq!(price.display(), PriceDisplay::NotAvailable);
        assert_eq!(price.headline(), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(120.0), "₹120");
        assert_eq!(format_amount(99.5), "₹99.5");
    }
}
