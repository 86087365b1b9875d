//! Catalog domain types mirrored from the backend wire format.
//!
//! Field names follow the primary deployment's JSON (`product_id`,
//! `store_name`, `product_images`, …); the alternate deployment returns the
//! same records under different names (`name`, `shop`, `price`,
//! `ps_min_price_store`), which are accepted as serde aliases so both
//! response shapes deserialize into one type.

use serde::{Deserialize, Serialize};

use crate::money::price_range_label;

/// `ps_type` value marking a store's primary product image.
pub const PRIMARY_IMAGE_TYPE: i32 = 1;

/// A product as listed by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_id")]
    pub id: i64,
    #[serde(rename = "product_name", alias = "name")]
    pub name: String,
    #[serde(rename = "product_image_url", alias = "image_url", default)]
    pub image_url: Option<String>,
    #[serde(rename = "location_name", default)]
    pub location: Option<String>,
    /// Lowest price across stores. `None` means "contact for price".
    #[serde(default, alias = "product_min_cost")]
    pub min_price: Option<i64>,
    #[serde(default, alias = "product_max_cost")]
    pub max_price: Option<i64>,
    /// Long description, only populated by the summary endpoint.
    #[serde(rename = "product_des", default)]
    pub description: Option<String>,
    /// Category tag, only populated by the summary endpoint.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub stores: Vec<Offer>,
}

impl Product {
    /// Display label for the product-level price range.
    #[must_use]
    pub fn price_label(&self) -> String {
        price_range_label(self.min_price, self.max_price)
    }

    /// Finds this product's offer from a specific store.
    #[must_use]
    pub fn find_store(&self, store_id: i64) -> Option<&Offer> {
        self.stores.iter().find(|s| s.store_id == Some(store_id))
    }
}

/// One store's listing of a product, carrying its own price, distance and
/// images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub store_id: Option<i64>,
    #[serde(rename = "store_name", alias = "shop")]
    pub store_name: String,
    #[serde(rename = "store_address", alias = "address", default)]
    pub address: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default, alias = "ps_min_price_store", alias = "price")]
    pub min_price: Option<i64>,
    #[serde(default, alias = "ps_max_price_store")]
    pub max_price: Option<i64>,
    /// Secondary price field some deployments fill instead of `min_price`.
    #[serde(default)]
    pub cost: Option<i64>,
    /// Flat image URL returned by the alternate deployment.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "product_images", default)]
    pub images: Vec<OfferImage>,
    #[serde(default, alias = "ps_average_rating")]
    pub rating: Option<f64>,
    #[serde(default, alias = "ps_total_reviews")]
    pub review_count: Option<i64>,
    /// Store-assigned listing id (`ps_id`); the detail-page cart key.
    #[serde(rename = "ps_id", default)]
    pub offer_id: Option<i64>,
}

impl Offer {
    /// URL of the offer's primary image: the type-1 tagged image if present,
    /// else the first tagged image, else the flat `image_url`. Callers fall
    /// back further to the product image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.kind == PRIMARY_IMAGE_TYPE)
            .or_else(|| self.images.first())
            .map(|img| img.url.as_str())
            .or(self.image_url.as_deref())
    }

    /// Unit price used for cart totals: minimum price, falling back to the
    /// secondary `cost` field, then to zero.
    #[must_use]
    pub fn unit_price(&self) -> i64 {
        self.min_price.or(self.cost).unwrap_or(0)
    }

    /// Display label for this store's price range.
    #[must_use]
    pub fn price_label(&self) -> String {
        price_range_label(self.min_price, self.max_price)
    }
}

/// An image attached to a store's listing, tagged by type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferImage {
    #[serde(rename = "ps_image_url")]
    pub url: String,
    /// Image role; `1` marks the primary image.
    #[serde(rename = "ps_type")]
    pub kind: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_offer(store_id: i64, images: Vec<OfferImage>) -> Offer {
        Offer {
            store_id: Some(store_id),
            store_name: format!("Store {store_id}"),
            address: Some("12 Nguyen Trai".to_string()),
            distance_km: Some(2.5),
            min_price: Some(40_000),
            max_price: Some(60_000),
            cost: None,
            image_url: None,
            images,
            rating: Some(4.5),
            review_count: Some(12),
            offer_id: None,
        }
    }

    #[test]
    fn primary_image_prefers_type_one() {
        let offer = make_offer(
            1,
            vec![
                OfferImage {
                    url: "https://cdn.example/extra.jpg".to_string(),
                    kind: 2,
                },
                OfferImage {
                    url: "https://cdn.example/main.jpg".to_string(),
                    kind: 1,
                },
            ],
        );
        assert_eq!(offer.primary_image(), Some("https://cdn.example/main.jpg"));
    }

    #[test]
    fn primary_image_falls_back_to_first_image() {
        let offer = make_offer(
            1,
            vec![OfferImage {
                url: "https://cdn.example/extra.jpg".to_string(),
                kind: 2,
            }],
        );
        assert_eq!(offer.primary_image(), Some("https://cdn.example/extra.jpg"));
    }

    #[test]
    fn primary_image_falls_back_to_flat_url() {
        let mut offer = make_offer(1, vec![]);
        offer.image_url = Some("https://cdn.example/flat.jpg".to_string());
        assert_eq!(offer.primary_image(), Some("https://cdn.example/flat.jpg"));
    }

    #[test]
    fn primary_image_none_without_images() {
        let offer = make_offer(1, vec![]);
        assert_eq!(offer.primary_image(), None);
    }

    #[test]
    fn unit_price_prefers_min_price() {
        let mut offer = make_offer(1, vec![]);
        offer.cost = Some(99_000);
        assert_eq!(offer.unit_price(), 40_000);
    }

    #[test]
    fn unit_price_falls_back_to_cost_then_zero() {
        let mut offer = make_offer(1, vec![]);
        offer.min_price = None;
        offer.cost = Some(99_000);
        assert_eq!(offer.unit_price(), 99_000);
        offer.cost = None;
        assert_eq!(offer.unit_price(), 0);
    }

    #[test]
    fn find_store_matches_on_store_id() {
        let product = Product {
            id: 7,
            name: "Phở bò".to_string(),
            image_url: None,
            location: Some("Hà Nội".to_string()),
            min_price: Some(40_000),
            max_price: Some(60_000),
            description: None,
            tag: None,
            stores: vec![make_offer(1, vec![]), make_offer(2, vec![])],
        };
        assert_eq!(
            product.find_store(2).and_then(|s| s.store_id),
            Some(2)
        );
        assert!(product.find_store(3).is_none());
    }

    #[test]
    fn deserializes_primary_deployment_shape() {
        let json = serde_json::json!({
            "product_id": 1,
            "product_name": "Bánh mì",
            "product_image_url": "https://cdn.example/banhmi.jpg",
            "location_name": "Đà Nẵng",
            "min_price": 15000,
            "max_price": 25000,
            "stores": [{
                "store_id": 10,
                "store_name": "Tiệm A",
                "store_address": "1 Lê Lợi",
                "distance_km": 1.2,
                "min_price": 15000,
                "max_price": 20000,
                "product_images": [
                    { "ps_image_url": "https://cdn.example/a.jpg", "ps_type": 1 }
                ]
            }]
        });
        let product: Product = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Bánh mì");
        assert_eq!(product.stores.len(), 1);
        assert_eq!(product.stores[0].store_id, Some(10));
        assert_eq!(
            product.stores[0].primary_image(),
            Some("https://cdn.example/a.jpg")
        );
    }

    #[test]
    fn deserializes_alternate_deployment_aliases() {
        let json = serde_json::json!({
            "product_id": 2,
            "name": "Cà phê sữa",
            "image_url": "https://cdn.example/coffee.jpg",
            "stores": [{
                "shop": "Quán B",
                "address": "5 Trần Phú",
                "price": 30000,
                "distance_km": 0.8,
                "image_url": "https://cdn.example/b.jpg"
            }]
        });
        let product: Product = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(product.name, "Cà phê sữa");
        assert_eq!(product.image_url.as_deref(), Some("https://cdn.example/coffee.jpg"));
        let offer = &product.stores[0];
        assert_eq!(offer.store_name, "Quán B");
        assert_eq!(offer.min_price, Some(30_000));
        assert_eq!(offer.primary_image(), Some("https://cdn.example/b.jpg"));
    }

    #[test]
    fn deserializes_summary_store_fields() {
        let json = serde_json::json!({
            "store_id": 4,
            "store_name": "Tiệm C",
            "ps_id": 991,
            "ps_min_price_store": 45000,
            "ps_max_price_store": 55000,
            "ps_average_rating": 4.2,
            "ps_total_reviews": 37
        });
        let offer: Offer = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(offer.offer_id, Some(991));
        assert_eq!(offer.min_price, Some(45_000));
        assert_eq!(offer.max_price, Some(55_000));
        assert_eq!(offer.rating, Some(4.2));
        assert_eq!(offer.review_count, Some(37));
    }

    #[test]
    fn price_label_uses_contact_label_without_min_price() {
        let mut offer = make_offer(1, vec![]);
        offer.min_price = None;
        offer.max_price = None;
        assert_eq!(offer.price_label(), crate::money::CONTACT_PRICE_LABEL);
    }
}
