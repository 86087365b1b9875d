//! Pure text projections of catalog, store and cart state.
//!
//! Every function here is a projection of its input: no I/O, no mutation,
//! so each view is unit-testable and re-derivable at any time.

use shopfront_cart::CartView;
use shopfront_core::{Catalog, Offer, Product};

/// Placeholder shown when a listing returns no products.
pub(crate) const NO_RESULTS: &str = "No products found.";

/// Placeholder shown when a product has no stores carrying it.
pub(crate) const NO_STORES: &str = "No stores carry this product.";

/// Renders the product listing, one card per product. `links_only` renders
/// a single "view details" line per product instead of the flattened store
/// list (the detail-link page variant).
pub(crate) fn product_list(catalog: &Catalog, links_only: bool) -> String {
    if catalog.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let mut out = String::new();
    for product in catalog.products() {
        out.push_str(&product_card(product, links_only));
    }
    out
}

fn product_card(product: &Product, links_only: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} — {}\n", product.name, product.price_label()));
    if let Some(location) = &product.location {
        out.push_str(&format!("  location: {location}\n"));
    }
    if let Some(image) = &product.image_url {
        out.push_str(&format!("  image: {image}\n"));
    }
    if links_only {
        out.push_str(&format!(
            "  view details: shopfront summary {}\n",
            product.id
        ));
    } else if product.stores.is_empty() {
        out.push_str(&format!("  {NO_STORES}\n"));
    } else {
        for offer in &product.stores {
            out.push_str(&offer_line(offer));
        }
    }
    out
}

fn offer_line(offer: &Offer) -> String {
    let distance = offer
        .distance_km
        .map_or_else(|| "unknown distance".to_string(), |d| format!("{d:.2} km"));
    let address = offer.address.as_deref().unwrap_or("no address");
    format!(
        "  {} ({address}) — {distance} — {}\n",
        offer.store_name,
        offer.price_label()
    )
}

/// Renders a sorted (or original-order) store list for one product.
pub(crate) fn store_list(offers: &[Offer]) -> String {
    if offers.is_empty() {
        return format!("{NO_STORES}\n");
    }
    let mut out = String::new();
    for offer in offers {
        out.push_str(&offer_line(offer));
    }
    out
}

/// Renders the extended product summary with per-store rating aggregates.
pub(crate) fn product_summary(product: &Product) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", product.name));
    if let Some(tag) = &product.tag {
        out.push_str(&format!("  #{tag}\n"));
    }
    out.push_str(&format!("  price: {}\n", product.price_label()));
    if let Some(description) = &product.description {
        out.push_str(&format!("  {description}\n"));
    }
    if product.stores.is_empty() {
        out.push_str(&format!("  {NO_STORES}\n"));
    } else {
        for offer in &product.stores {
            out.push_str(&offer_line(offer));
            out.push_str(&format!("    rating: {}\n", rating_label(offer)));
        }
    }
    out
}

fn rating_label(offer: &Offer) -> String {
    match offer.rating {
        Some(rating) => format!(
            "{rating:.1} ({} reviews)",
            offer.review_count.unwrap_or(0)
        ),
        None => "no reviews yet".to_string(),
    }
}

/// Renders the cart panel: badge, line items, formatted total.
pub(crate) fn cart_panel(view: &CartView) -> String {
    let mut out = String::new();
    if view.badge_visible {
        out.push_str(&format!("Cart ({} items)\n", view.total_quantity));
    } else {
        out.push_str("Cart\n");
    }
    if view.lines.is_empty() {
        out.push_str("  cart is empty\n");
    } else {
        for line in &view.lines {
            let store = if line.store_name.is_empty() {
                String::new()
            } else {
                format!(" — {}", line.store_name)
            };
            out.push_str(&format!(
                "  [{}] {}{store} — {} x {} = {}\n",
                line.key,
                line.name,
                shopfront_core::format_money(line.unit_price),
                line.quantity,
                shopfront_core::format_money(line.line_total()),
            ));
        }
    }
    out.push_str(&format!("  total: {}\n", view.total_label()));
    out
}
