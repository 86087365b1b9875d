//! Cart command handlers.
//!
//! Every mutation goes through the owning [`CartStore`], which persists the
//! full mapping before the panel is re-derived and rendered — the same
//! mutate → persist → re-render cycle as the storefront pages.

use clap::Subcommand;
use shopfront_api::{SearchFilters, StorefrontClient};
use shopfront_cart::{CartKey, CartStore};
use shopfront_core::{AppConfig, Catalog};

use crate::render;

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub(crate) enum CartCommands {
    /// Add a catalog listing (one product at one store)
    Add {
        product_id: i64,
        store_id: i64,
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Add a detail-page offer by its store-assigned id
    AddOffer {
        offer_id: String,
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Change a line's quantity by a signed delta; zero or below drops it
    Change {
        key: String,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line outright
    Remove { key: String },
    /// Empty the cart
    Clear,
    /// Show the cart panel
    Show,
}

pub(crate) async fn run_cart(config: &AppConfig, command: CartCommands) -> anyhow::Result<()> {
    let mut store = CartStore::open(&config.state_dir)?;

    match command {
        CartCommands::Add {
            product_id,
            store_id,
            qty,
        } => store.add(CartKey::listing(product_id, store_id), qty)?,
        CartCommands::AddOffer { offer_id, qty } => store.add(CartKey::offer(offer_id), qty)?,
        CartCommands::Change { key, delta } => {
            store.change_quantity(&CartKey::parse(&key), delta)?;
        }
        CartCommands::Remove { key } => store.remove(&CartKey::parse(&key))?,
        CartCommands::Clear => store.clear()?,
        CartCommands::Show => {}
    }

    // Price the panel against a freshly loaded catalog; when the backend is
    // unreachable the lines render as placeholders with a zero total.
    let mut catalog = Catalog::new();
    let client = StorefrontClient::from_config(config)?;
    match client.search_products(&SearchFilters::default()).await {
        Ok(products) => catalog.replace(products),
        Err(err) => {
            tracing::warn!(
                error = %err,
                "catalog fetch failed, cart lines will render as placeholders"
            );
        }
    }
    print!("{}", render::cart_panel(&store.view(&catalog)));
    Ok(())
}
