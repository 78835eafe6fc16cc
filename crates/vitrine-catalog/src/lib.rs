//! Commerce catalog types for Vitrine storefronts.
//!
//! This crate provides the read-side domain model a storefront UI works
//! with:
//!
//! - **Money**: cents-based monetary values with currency metadata
//! - **IDs**: newtype identifiers for products and variants
//! - **Products**: products, variants, options, and swatch metadata as
//!   returned by a commerce backend
//!
//! Everything here is plain data: immutable once fetched, serde-ready so it
//! can cross the server-function boundary, and free of any UI or transport
//! concerns.

pub mod error;
pub mod ids;
pub mod image;
pub mod money;
pub mod product;

pub use error::CatalogError;
pub use ids::{ProductId, VariantId};
pub use image::Image;
pub use money::{Currency, Money};
pub use product::{
    OptionValue, Product, ProductOption, ProductVariant, SelectedOption, Swatch, COLOR_OPTION,
};
