//! The derived cart panel: line items, totals, badge visibility.

use shopfront_core::{format_money, Catalog, Offer, Product};

use crate::cart::Cart;
use crate::key::CartKey;

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub key: CartKey,
    pub name: String,
    pub store_name: String,
    pub unit_price: i64,
    pub image_url: Option<String>,
    pub quantity: u32,
    /// Set when the key did not resolve against the loaded catalog and the
    /// display fields are placeholders.
    pub placeholder: bool,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

/// The visible cart panel, re-derived from the mapping plus the current
/// catalog after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total_quantity: u64,
    pub total_price: i64,
    /// The count badge is shown only when something is in the cart.
    pub badge_visible: bool,
}

impl CartView {
    /// Resolves every cart key against the loaded catalog.
    ///
    /// Lines are priced from whichever catalog is currently loaded, so a
    /// page that loaded a different catalog subset can price the same key
    /// differently — kept from the original design. A key the catalog
    /// cannot resolve keeps its quantity and renders as a placeholder row
    /// contributing zero to the total; it is never dropped.
    #[must_use]
    pub fn derive(cart: &Cart, catalog: &Catalog) -> Self {
        let mut lines = Vec::with_capacity(cart.len());
        let mut total_price = 0i64;
        for (key, quantity) in cart.iter() {
            let line = match resolve(key, catalog) {
                Some((product, offer)) => CartLine {
                    key: key.clone(),
                    name: product.name.clone(),
                    store_name: offer.store_name.clone(),
                    unit_price: offer.unit_price(),
                    image_url: offer
                        .primary_image()
                        .map(str::to_string)
                        .or_else(|| product.image_url.clone()),
                    quantity,
                    placeholder: false,
                },
                None => placeholder_line(key, quantity),
            };
            total_price += line.line_total();
            lines.push(line);
        }
        let total_quantity = cart.total_quantity();
        Self {
            lines,
            total_quantity,
            total_price,
            badge_visible: total_quantity > 0,
        }
    }

    /// The formatted total, `"0₫"` for an empty cart.
    #[must_use]
    pub fn total_label(&self) -> String {
        format_money(self.total_price)
    }
}

fn resolve<'a>(key: &CartKey, catalog: &'a Catalog) -> Option<(&'a Product, &'a Offer)> {
    match key {
        CartKey::Listing {
            product_id,
            store_id,
        } => catalog.find_offer(*product_id, *store_id),
        CartKey::Offer(id) => catalog.find_by_offer_id(id),
    }
}

fn placeholder_line(key: &CartKey, quantity: u32) -> CartLine {
    let (name, store_name) = match key {
        CartKey::Listing {
            product_id,
            store_id,
        } => (format!("Product #{product_id}"), format!("Store #{store_id}")),
        CartKey::Offer(id) => (format!("Offer #{id}"), String::new()),
    };
    CartLine {
        key: key.clone(),
        name,
        store_name,
        unit_price: 0,
        image_url: None,
        quantity,
        placeholder: true,
    }
}
