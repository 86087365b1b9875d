//! Catalog listing commands: text search, image search, location listing.
//!
//! Fetch failures are recovered here and rendered as inline status lines;
//! the catalog is only replaced once a response has parsed, so an error
//! never clobbers previously rendered state.

use std::path::Path;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use shopfront_api::{ImageSearchOutcome, LocationQuery, SearchFilters, StorefrontClient};
use shopfront_cart::CartStore;
use shopfront_core::{AppConfig, Catalog};

use crate::render;

/// Fixed line shown when the backend cannot be reached.
pub(crate) const CONNECTION_ERROR: &str = "Unable to reach the server.";

/// Fetches the product listing and renders it, followed by the cart panel
/// priced against whatever was loaded.
pub(crate) async fn run_browse(
    config: &AppConfig,
    filters: &SearchFilters,
    links_only: bool,
) -> anyhow::Result<()> {
    let client = StorefrontClient::from_config(config)?;
    let mut catalog = Catalog::new();

    match client.search_products(filters).await {
        Ok(products) => {
            catalog.replace(products);
            print!("{}", render::product_list(&catalog, links_only));
        }
        Err(err) => {
            tracing::warn!(error = %err, "product listing fetch failed");
            println!("{CONNECTION_ERROR}");
        }
    }

    print_cart_panel(config, &catalog)?;
    Ok(())
}

/// Searches by image and renders the resulting listing.
///
/// A recognized image replaces the catalog under a heading echoing the
/// detected term; a miss renders the backend's message over an empty
/// listing; a backend failure renders its message and leaves nothing
/// replaced.
pub(crate) async fn run_image_search(config: &AppConfig, image: &str) -> anyhow::Result<()> {
    let payload = image_payload(image)?;
    let client = StorefrontClient::from_config(config)?;
    let mut catalog = Catalog::new();

    match client.search_by_image(&payload).await {
        Ok(ImageSearchOutcome::Found {
            products,
            search_term,
        }) => {
            if let Some(term) = &search_term {
                println!("Results for \"{term}\"");
            }
            catalog.replace(products);
            print!("{}", render::product_list(&catalog, false));
        }
        Ok(ImageSearchOutcome::NotFound { message }) => {
            println!("{message}");
            catalog.replace(Vec::new());
            print!("{}", render::product_list(&catalog, false));
        }
        Ok(ImageSearchOutcome::Failed { message }) => {
            println!("Error: {message}");
        }
        Err(err) => {
            tracing::warn!(error = %err, "image search failed");
            println!("{CONNECTION_ERROR}");
        }
    }

    print_cart_panel(config, &catalog)?;
    Ok(())
}

/// Lists products near coordinates or a city via the alternate deployment.
pub(crate) async fn run_nearby(
    config: &AppConfig,
    coordinates: Option<(f64, f64)>,
    city: Option<String>,
    limit: Option<u32>,
) -> anyhow::Result<()> {
    let query = match (coordinates, city) {
        (Some((latitude, longitude)), _) => LocationQuery::Coordinates {
            latitude,
            longitude,
        },
        (None, Some(city)) => LocationQuery::City(city),
        (None, None) => anyhow::bail!("pass either --lat/--lon or --city"),
    };

    let client = StorefrontClient::from_config(config)?;
    match client
        .products_near(&query, limit.unwrap_or(config.product_limit))
        .await
    {
        Ok(located) => {
            if let Some(city) = &located.city {
                println!("Products near {city}: {}", located.count);
            } else {
                println!("Products: {}", located.count);
            }
            let mut catalog = Catalog::new();
            catalog.replace(located.products);
            print!("{}", render::product_list(&catalog, true));
        }
        Err(err) => {
            tracing::warn!(error = %err, "location listing fetch failed");
            println!("{CONNECTION_ERROR}");
        }
    }
    Ok(())
}

/// Re-derives and renders the cart panel from durable storage plus the
/// given catalog.
pub(crate) fn print_cart_panel(config: &AppConfig, catalog: &Catalog) -> anyhow::Result<()> {
    let store = CartStore::open(&config.state_dir)?;
    print!("{}", render::cart_panel(&store.view(catalog)));
    Ok(())
}

/// Turns the CLI's image argument into the endpoint payload: URLs and data
/// URLs pass through, a local file is inlined as a base64 data URL.
fn image_payload(image: &str) -> anyhow::Result<String> {
    if image.starts_with("http://") || image.starts_with("https://") || image.starts_with("data:")
    {
        return Ok(image.to_string());
    }
    let bytes =
        std::fs::read(image).with_context(|| format!("reading image file '{image}'"))?;
    let mime = match Path::new(image)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    };
    Ok(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}
