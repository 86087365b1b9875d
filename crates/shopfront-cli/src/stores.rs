//! Per-product commands: the store listing with sorting, and the extended
//! summary.

use shopfront_api::StorefrontClient;
use shopfront_core::{sort_offers, AppConfig};

use crate::browse::CONNECTION_ERROR;
use crate::render;

/// Fetches a product's stores and renders them through the sorter.
///
/// With neither sort flag the backend's order is rendered as-is, so
/// toggling the flags off recovers the original ordering.
pub(crate) async fn run_stores(
    config: &AppConfig,
    product_id: i64,
    coordinates: Option<(f64, f64)>,
    by_distance: bool,
    by_price: bool,
) -> anyhow::Result<()> {
    let client = StorefrontClient::from_config(config)?;
    match client.product_stores(product_id, coordinates).await {
        Ok(stores) => {
            let ordered = sort_offers(&stores.results, by_distance, by_price);
            print!("{}", render::store_list(&ordered));
            println!("Stores: {}", stores.count);
        }
        Err(err) => {
            tracing::warn!(error = %err, product_id, "store listing fetch failed");
            println!("{CONNECTION_ERROR}");
        }
    }
    Ok(())
}

/// Fetches and renders the extended summary for one product.
pub(crate) async fn run_summary(config: &AppConfig, product_id: i64) -> anyhow::Result<()> {
    let client = StorefrontClient::from_config(config)?;
    match client.product_summary(product_id).await {
        Ok(Some(product)) => print!("{}", render::product_summary(&product)),
        Ok(None) => println!("Product not found."),
        Err(err) => {
            tracing::warn!(error = %err, product_id, "summary fetch failed");
            println!("{CONNECTION_ERROR}");
        }
    }
    Ok(())
}
