//! Storefront client error types.

use thiserror::Error;
use vitrine_catalog::CatalogError;

/// Errors that can occur when querying the commerce backend.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Json(String),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Expected data missing from the response.
    #[error("Missing data in response: {0}")]
    MissingData(String),

    /// Malformed money value on the wire.
    #[error("Invalid money value: {0}")]
    Money(String),
}

impl From<serde_json::Error> for StorefrontError {
    fn from(e: serde_json::Error) -> Self {
        StorefrontError::Json(e.to_string())
    }
}

impl From<CatalogError> for StorefrontError {
    fn from(e: CatalogError) -> Self {
        StorefrontError::Money(e.to_string())
    }
}

/// A GraphQL error returned by the backend.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    #[serde(default)]
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
