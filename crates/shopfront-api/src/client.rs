//! HTTP client for the storefront backend.
//!
//! Wraps `reqwest` with base-URL handling, a request timeout, a configured
//! user agent, and typed response deserialization. There is deliberately no
//! retry: a failed request surfaces an error to the caller, which renders
//! an inline message and keeps its previous state.

use std::time::Duration;

use reqwest::{Client, Url};
use shopfront_core::{AppConfig, Product};

use crate::error::ApiError;
use crate::types::{
    ImageSearchOutcome, ImageSearchResponse, LocatedProducts, LocationQuery, SearchFilters,
    StoreResults,
};

/// Client for the storefront backend REST API.
///
/// Use [`StorefrontClient::from_config`] in the binary or
/// [`StorefrontClient::new`] to point at a mock server in tests.
pub struct StorefrontClient {
    client: Client,
    base_url: Url,
}

impl StorefrontClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::Api`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joined endpoint paths land under it rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ApiError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`StorefrontClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            config.api_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the product listing, forwarding the filters verbatim.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ApiError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_products(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<Product>, ApiError> {
        let url = self.search_url(filters)?;
        let body = self.get_json(url).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
            context: format!("GET /api/products?search={}", filters.search),
            source: e,
        })
    }

    /// Fetches the extended summary for one product.
    ///
    /// The endpoint returns a single-element array to keep the listing
    /// shape; this unwraps it, with `Ok(None)` for an empty result.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ApiError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn product_summary(&self, product_id: i64) -> Result<Option<Product>, ApiError> {
        let mut url = self.endpoint("api/product_summary")?;
        url.query_pairs_mut()
            .append_pair("product_id", &product_id.to_string());
        let body = self.get_json(url).await?;
        let mut products: Vec<Product> =
            serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
                context: format!("GET /api/product_summary?product_id={product_id}"),
                source: e,
            })?;
        if products.is_empty() {
            Ok(None)
        } else {
            Ok(Some(products.remove(0)))
        }
    }

    /// Searches the catalog with an image, given as a data URL or a plain
    /// image URL.
    ///
    /// The endpoint reports recognition failures inside the JSON envelope
    /// rather than the HTTP status, so the body is parsed regardless of
    /// status code and surfaced as an [`ImageSearchOutcome`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the body is not a valid envelope.
    pub async fn search_by_image(&self, image: &str) -> Result<ImageSearchOutcome, ApiError> {
        let url = self.endpoint("api/search-by-image")?;
        tracing::debug!(url = %url, "POST image search");
        let response = self
            .client
            .post(url.clone())
            .json(&serde_json::json!({ "image": image }))
            .send()
            .await?;
        let body = response.text().await?;
        let envelope: ImageSearchResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        Ok(envelope.into())
    }

    /// Lists products near a location (alternate deployment), by
    /// coordinates or by city name.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ApiError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn products_near(
        &self,
        query: &LocationQuery,
        limit: u32,
    ) -> Result<LocatedProducts, ApiError> {
        let url = self.endpoint("api/products")?;
        let payload = match query {
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => serde_json::json!({
                "latitude": latitude,
                "longitude": longitude,
                "limit": limit,
            }),
            LocationQuery::City(city) => serde_json::json!({
                "city": city,
                "limit": limit,
            }),
        };
        let body = self.post_json(url, &payload).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
            context: "POST /api/products".to_string(),
            source: e,
        })
    }

    /// Lists the stores offering a product, with distances when the
    /// caller's coordinates are supplied.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ApiError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn product_stores(
        &self,
        product_id: i64,
        coordinates: Option<(f64, f64)>,
    ) -> Result<StoreResults, ApiError> {
        let url = self.endpoint("api/product-stores")?;
        let mut payload = serde_json::json!({ "product_id": product_id });
        if let Some((latitude, longitude)) = coordinates {
            payload["latitude"] = latitude.into();
            payload["longitude"] = longitude.into();
        }
        let body = self.post_json(url, &payload).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
            context: format!("POST /api/product-stores (product_id={product_id})"),
            source: e,
        })
    }

    /// Builds the product listing URL with all filter parameters attached.
    /// The backend expects `search`, `distance` and `price` to always be
    /// present, empty when unused.
    fn search_url(&self, filters: &SearchFilters) -> Result<Url, ApiError> {
        let mut url = self.endpoint("api/products")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("search", &filters.search);
            pairs.append_pair("distance", &filters.distance);
            pairs.append_pair("price", &filters.price);
            if let Some(limit) = filters.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Api(format!("invalid endpoint '{path}': {e}")))
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn get_json(&self, url: Url) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Sends a POST request with a JSON body, asserts a 2xx HTTP status,
    /// and parses the response body as JSON.
    async fn post_json(
        &self,
        url: Url,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(url = %url, "POST");
        let response = self.client.post(url.clone()).json(payload).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> StorefrontClient {
        StorefrontClient::new(base_url, 30, "shopfront-test/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn search_url_includes_all_filters() {
        let client = test_client("http://localhost:5000");
        let filters = SearchFilters {
            search: "milk".to_string(),
            distance: "5".to_string(),
            price: "100000".to_string(),
            limit: Some(20),
        };
        let url = client.search_url(&filters).expect("url should build");
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/products?search=milk&distance=5&price=100000&limit=20"
        );
    }

    #[test]
    fn search_url_sends_empty_filters_verbatim() {
        let client = test_client("http://localhost:5000");
        let url = client
            .search_url(&SearchFilters::default())
            .expect("url should build");
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/products?search=&distance=&price="
        );
    }

    #[test]
    fn search_url_percent_encodes_the_term() {
        let client = test_client("http://localhost:5000");
        let filters = SearchFilters {
            search: "bánh mì".to_string(),
            ..SearchFilters::default()
        };
        let url = client.search_url(&filters).expect("url should build");
        assert!(
            !url.as_str().contains("bánh mì"),
            "search term should be percent-encoded: {url}"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let with = test_client("http://localhost:5000/");
        let without = test_client("http://localhost:5000");
        assert_eq!(with.base_url, without.base_url);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = StorefrontClient::new("not a url", 30, "shopfront-test/0.1");
        assert!(matches!(result, Err(ApiError::Api(_))));
    }
}
