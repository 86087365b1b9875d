//! Request and response types for the storefront backend endpoints.

use serde::Deserialize;
use shopfront_core::{Offer, Product};

/// Query filters for `GET /api/products`.
///
/// Values are forwarded to the backend exactly as given — the backend owns
/// validation and interpretation, the client does neither.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub search: String,
    pub distance: String,
    pub price: String,
    pub limit: Option<u32>,
}

/// Raw envelope returned by `POST /api/search-by-image`.
#[derive(Debug, Deserialize)]
pub struct ImageSearchResponse {
    pub status: String,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// An image search collapsed from the status envelope.
#[derive(Debug)]
pub enum ImageSearchOutcome {
    /// The backend recognized the image; `search_term` echoes the query it
    /// derived from it.
    Found {
        products: Vec<Product>,
        search_term: Option<String>,
    },
    /// The image was processed but matched nothing.
    NotFound { message: String },
    /// The backend reported a failure in the envelope.
    Failed { message: String },
}

impl From<ImageSearchResponse> for ImageSearchOutcome {
    fn from(response: ImageSearchResponse) -> Self {
        match response.status.as_str() {
            "success" => Self::Found {
                products: response.products.unwrap_or_default(),
                search_term: response.search_term,
            },
            "not_found" => Self::NotFound {
                message: response
                    .message
                    .unwrap_or_else(|| "no matching products".to_string()),
            },
            other => Self::Failed {
                message: response
                    .message
                    .unwrap_or_else(|| format!("backend returned status '{other}'")),
            },
        }
    }
}

/// Location selector for the alternate deployment's `POST /api/products`.
#[derive(Debug, Clone)]
pub enum LocationQuery {
    Coordinates { latitude: f64, longitude: f64 },
    City(String),
}

/// Response from `POST /api/products`.
#[derive(Debug, Deserialize)]
pub struct LocatedProducts {
    pub products: Vec<Product>,
    pub count: i64,
    /// City the coordinates resolved to, when the backend looked one up.
    #[serde(default)]
    pub city: Option<String>,
}

/// Response from `POST /api/product-stores`.
#[derive(Debug, Deserialize)]
pub struct StoreResults {
    pub results: Vec<Offer>,
    pub count: i64,
}
