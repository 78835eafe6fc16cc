//! Storefront API client for Vitrine.
//!
//! Fetches recommended products over the backend's GraphQL endpoint and
//! maps the wire format into `vitrine_catalog` types. Designed for Spin
//! WASM applications; on other targets the transport is a stub so the
//! crate stays testable on the host.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_storefront::{load_recommended, PromoConfig, StorefrontClient, StorefrontConfig};
//!
//! // In a server function
//! let config = StorefrontConfig::new("demo.myshopify.com", access_token);
//! let client = StorefrontClient::new(config);
//! let promo = PromoConfig::default().with_sale_sampler(7);
//!
//! // None on any failure; the homepage renders an empty section.
//! let products = load_recommended(&client, 4, &promo).await;
//! ```

mod error;
mod loader;
mod promo;
mod query;
mod response;

pub use error::{GraphQLError, GraphQLErrorLocation, StorefrontError};
pub use loader::load_recommended;
pub use promo::{PromoConfig, SaleSampler};
pub use query::{
    product_by_handle_variables, recommended_products_variables, Localization, MAX_RECOMMENDED,
    MAX_VARIANTS, PRODUCT_BY_HANDLE_QUERY, RECOMMENDED_PRODUCTS_QUERY,
};

use vitrine_catalog::Product;

/// Storefront API version requested when none is configured.
pub const DEFAULT_API_VERSION: &str = "2025-01";

#[allow(dead_code)] // Used in wasm32 target
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Connection settings for one storefront.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    shop_domain: String,
    access_token: String,
    api_version: String,
}

impl StorefrontConfig {
    /// Create a config for a shop domain and public access token.
    pub fn new(shop_domain: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            shop_domain: shop_domain.into(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Override the API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// The GraphQL endpoint URL for this config.
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.shop_domain, self.api_version
        )
    }
}

/// Client for the storefront GraphQL API.
pub struct StorefrontClient {
    config: StorefrontConfig,
    localization: Localization,
}

impl StorefrontClient {
    /// Create a client with the default localization.
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            localization: Localization::default(),
        }
    }

    /// Set the country and language sent with every query.
    pub fn with_localization(mut self, localization: Localization) -> Self {
        self.localization = localization;
        self
    }

    /// Fetch up to `first` recommended products.
    ///
    /// `first` is clamped to [`MAX_RECOMMENDED`] before it reaches the
    /// backend.
    pub async fn recommended_products(
        &self,
        first: usize,
    ) -> Result<Vec<Product>, StorefrontError> {
        let body = serde_json::to_vec(&self.recommended_payload(first))?;

        tracing::debug!(
            first = first.min(MAX_RECOMMENDED),
            "requesting recommended products"
        );

        let bytes = self.send(body).await?;
        response::parse_products(&bytes)
    }

    /// Fetch a single product by its URL handle.
    pub async fn product_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Product>, StorefrontError> {
        let body = serde_json::to_vec(&self.product_payload(handle))?;

        tracing::debug!(handle, "requesting product by handle");

        let bytes = self.send(body).await?;
        response::parse_product(&bytes)
    }

    /// Request body for the recommended-products query.
    fn recommended_payload(&self, first: usize) -> serde_json::Value {
        serde_json::json!({
            "query": RECOMMENDED_PRODUCTS_QUERY,
            "variables": query::recommended_products_variables(first, &self.localization),
        })
    }

    /// Request body for the product-by-handle query.
    fn product_payload(&self, handle: &str) -> serde_json::Value {
        serde_json::json!({
            "query": PRODUCT_BY_HANDLE_QUERY,
            "variables": query::product_by_handle_variables(handle, &self.localization),
        })
    }

    /// Send the query and return the raw response body.
    #[cfg(target_arch = "wasm32")]
    async fn send(&self, body: Vec<u8>) -> Result<Vec<u8>, StorefrontError> {
        use spin_sdk::http::{Method, Request};

        let url = self.config.endpoint();

        let mut builder = Request::builder();
        builder.method(Method::Post);
        builder.uri(url.as_str());
        builder.header("Content-Type", "application/json");
        builder.header("Accept", "application/json");
        builder.header(ACCESS_TOKEN_HEADER, self.config.access_token.as_str());
        builder.body(body);

        let response: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| StorefrontError::Request(e.to_string()))?;

        let status = *response.status();
        if !(200..300).contains(&status) {
            return Err(StorefrontError::Http { status, url });
        }

        Ok(response.into_body())
    }

    /// Send the query and return the raw response body (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, _body: Vec<u8>) -> Result<Vec<u8>, StorefrontError> {
        // Return empty response for non-WASM builds (testing/development)
        Ok(Vec::new())
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        load_recommended, Localization, PromoConfig, SaleSampler, StorefrontClient,
        StorefrontConfig, StorefrontError,
    };
}
