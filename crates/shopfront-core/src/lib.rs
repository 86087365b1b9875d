//! Domain core for the shopfront client: catalog types mirrored from the
//! backend wire format, money formatting, the in-memory catalog state, the
//! multi-criteria store sorter, and configuration.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod money;
pub mod product;
pub mod sort;

pub use app_config::{AppConfig, Environment};
pub use catalog::Catalog;
pub use config::{load_app_config, load_app_config_from_env};
pub use money::{format_money, price_range_label, CONTACT_PRICE_LABEL};
pub use product::{Offer, OfferImage, Product, PRIMARY_IMAGE_TYPE};
pub use sort::sort_offers;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
