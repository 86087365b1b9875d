//! HTTP client for the storefront backend REST API.

pub mod client;
pub mod error;
pub mod types;

pub use client::StorefrontClient;
pub use error::ApiError;
pub use types::{
    ImageSearchOutcome, ImageSearchResponse, LocatedProducts, LocationQuery, SearchFilters,
    StoreResults,
};
