//! Product, variant, and option types as the storefront sees them.
//!
//! These mirror the shape of the recommended-products query: a product
//! carries its options (with swatch metadata for color values) and up to
//! a handful of variants, each pinned to concrete option values.

use crate::ids::{ProductId, VariantId};
use crate::image::Image;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Canonical name of the option swatches are rendered for.
///
/// All lookups against it are case-insensitive; backends disagree on
/// "Color" vs "color".
pub const COLOR_OPTION: &str = "Color";

/// A swatch token attached to a color option value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Swatch {
    /// CSS color token (e.g., "#1a2b3c").
    pub color: Option<String>,
    /// Preview image URL, preferred over the flat color when present.
    pub image_url: Option<String>,
}

/// One value of a product option, with optional swatch metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionValue {
    /// Human-readable value (e.g., "Midnight Blue").
    pub name: String,
    /// Swatch rendering hint, present on color options.
    pub swatch: Option<Swatch>,
}

/// A product option (e.g., "Color") and its ordered values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOption {
    /// Option name.
    pub name: String,
    /// Ordered values this option can take.
    pub values: Vec<OptionValue>,
}

/// One name/value pair pinned on a variant (e.g., Color: Blue).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Option value (e.g., "Large", "Blue").
    pub value: String,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Variant title (e.g., "Large / Blue").
    pub title: String,
    /// Whether the backend reports this variant as purchasable.
    pub available_for_sale: bool,
    /// Stock keeping unit, when the backend exposes one.
    pub sku: Option<String>,
    /// Price of this variant.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    pub compare_at_price: Option<Money>,
    /// Per-unit price for measured goods, when present.
    pub unit_price: Option<Money>,
    /// Image shown while this variant is displayed.
    pub image: Option<Image>,
    /// Options that define this variant.
    pub selected_options: Vec<SelectedOption>,
}

impl ProductVariant {
    /// Check if this variant is on sale (compare-at above the actual price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Look up this variant's value for an option, case-insensitively.
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
            .map(|o| o.value.as_str())
    }

    /// Check whether this variant carries the given option name/value
    /// pair, case-insensitively on both sides.
    pub fn matches_option(&self, name: &str, value: &str) -> bool {
        self.selected_options
            .iter()
            .any(|o| o.name.eq_ignore_ascii_case(name) && o.value.eq_ignore_ascii_case(value))
    }
}

/// A product as returned by the recommended-products query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Vendor / brand name.
    pub vendor: String,
    /// URL-friendly slug; cards link to `/products/{handle}`.
    pub handle: String,
    /// Plain-text description.
    pub description: String,
    /// HTML description.
    pub description_html: String,
    /// Ordered options with swatch metadata.
    pub options: Vec<ProductOption>,
    /// Ordered variants, at most a handful per product.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Index of the variant a freshly mounted card selects: the first
    /// available-for-sale variant, falling back to the first variant when
    /// none is available. Meaningful only when the product has variants.
    pub fn initial_variant_index(&self) -> usize {
        self.variants
            .iter()
            .position(|v| v.available_for_sale)
            .unwrap_or(0)
    }

    /// Index of the first variant carrying the given option name/value
    /// pair, case-insensitively.
    pub fn variant_index_by_option(&self, name: &str, value: &str) -> Option<usize> {
        self.variants
            .iter()
            .position(|v| v.matches_option(name, value))
    }

    /// The product's color option, if it has one.
    pub fn color_option(&self) -> Option<&ProductOption> {
        self.options
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(COLOR_OPTION))
    }
}
