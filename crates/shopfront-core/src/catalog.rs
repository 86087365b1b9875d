//! The in-memory catalog: the product list currently loaded for display.

use crate::product::{Offer, Product};

/// Owned catalog state, replaced wholesale on every successful fetch — no
/// merge, no incremental update. A failed fetch must leave the previous
/// contents untouched, so callers only [`replace`](Self::replace) after a
/// response has parsed.
///
/// When two fetches race, whichever response is applied last is what
/// renders — not necessarily the most recently issued request. That
/// staleness is inherited from the original design and deliberately not
/// remedied here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire catalog with a fresh listing.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn find_product(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Looks up a specific store's offer of a product.
    #[must_use]
    pub fn find_offer(&self, product_id: i64, store_id: i64) -> Option<(&Product, &Offer)> {
        let product = self.find_product(product_id)?;
        let offer = product.find_store(store_id)?;
        Some((product, offer))
    }

    /// Looks up an offer by its opaque store-assigned id. Only catalogs
    /// loaded from the summary endpoint carry these ids, so a miss is
    /// common and callers must degrade to a placeholder.
    #[must_use]
    pub fn find_by_offer_id(&self, offer_id: &str) -> Option<(&Product, &Offer)> {
        self.products.iter().find_map(|product| {
            product
                .stores
                .iter()
                .find(|offer| {
                    offer
                        .offer_id
                        .is_some_and(|id| id.to_string() == offer_id)
                })
                .map(|offer| (product, offer))
        })
    }
}
