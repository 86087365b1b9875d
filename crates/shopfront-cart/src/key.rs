//! Canonical cart line-item key.
//!
//! The storefront historically used two key schemes for the same cart:
//! catalog pages write `"{productId}_{storeId}"`, the detail page writes
//! the store-assigned offer id. One tagged type normalizes both at the
//! boundary where entries are added, so nothing downstream branches on the
//! raw string shape.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CartKey {
    /// Catalog flow: one product at one store, rendered
    /// `"{product_id}_{store_id}"`.
    Listing { product_id: i64, store_id: i64 },
    /// Detail-page flow: an opaque store-assigned offer id, rendered
    /// verbatim.
    Offer(String),
}

impl CartKey {
    #[must_use]
    pub fn listing(product_id: i64, store_id: i64) -> Self {
        Self::Listing {
            product_id,
            store_id,
        }
    }

    #[must_use]
    pub fn offer(id: impl Into<String>) -> Self {
        Self::Offer(id.into())
    }

    /// Total parse of a stored key string: `number_number` is a listing
    /// key, anything else stays opaque. Never fails, so any persisted cart
    /// — including ones written under the old mixed scheme — loads.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some((product, store)) = raw.split_once('_') {
            if let (Ok(product_id), Ok(store_id)) =
                (product.parse::<i64>(), store.parse::<i64>())
            {
                return Self::Listing {
                    product_id,
                    store_id,
                };
            }
        }
        Self::Offer(raw.to_string())
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing {
                product_id,
                store_id,
            } => write!(f, "{product_id}_{store_id}"),
            Self::Offer(id) => f.write_str(id),
        }
    }
}

// Stored carts are JSON objects keyed by the rendered string, so the key
// serializes as a string in both map and value position.
impl Serialize for CartKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CartKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_keys() {
        assert_eq!(CartKey::parse("12_34"), CartKey::listing(12, 34));
    }

    #[test]
    fn parses_opaque_offer_keys() {
        assert_eq!(CartKey::parse("991"), CartKey::offer("991"));
        assert_eq!(CartKey::parse("sku_abc"), CartKey::offer("sku_abc"));
        assert_eq!(CartKey::parse("1_2_3"), CartKey::offer("1_2_3"));
        assert_eq!(CartKey::parse(""), CartKey::offer(""));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in [
            CartKey::listing(12, 34),
            CartKey::offer("991"),
            CartKey::offer("sku_abc"),
        ] {
            assert_eq!(CartKey::parse(&key.to_string()), key);
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&CartKey::listing(12, 34)).expect("should serialize");
        assert_eq!(json, "\"12_34\"");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let key: CartKey = serde_json::from_str("\"12_34\"").expect("should deserialize");
        assert_eq!(key, CartKey::listing(12, 34));
    }
}
