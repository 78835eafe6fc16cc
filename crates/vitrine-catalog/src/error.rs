//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while interpreting catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Unknown currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Malformed decimal amount.
    #[error("Invalid money amount: {0}")]
    InvalidAmount(String),
}
