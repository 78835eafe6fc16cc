//! The storefront query documents and their variables.

use serde::{Deserialize, Serialize};

/// Maximum number of products one listing request asks for.
pub const MAX_RECOMMENDED: usize = 5;

/// Maximum number of variants requested per product. The query document
/// carries this as a literal; a test keeps the two in sync.
pub const MAX_VARIANTS: usize = 5;

/// Query for the homepage listing: the most recently updated products,
/// with options, swatch metadata, and a handful of variants each.
pub const RECOMMENDED_PRODUCTS_QUERY: &str = r#"
query RecommendedProducts($first: Int!, $country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  products(first: $first, sortKey: UPDATED_AT, reverse: true) {
    nodes {
      id
      title
      vendor
      handle
      description
      descriptionHtml
      options {
        name
        optionValues {
          name
          swatch {
            color
            image {
              previewImage {
                url
              }
            }
          }
        }
      }
      variants(first: 5) {
        nodes {
          id
          title
          availableForSale
          sku
          price {
            amount
            currencyCode
          }
          compareAtPrice {
            amount
            currencyCode
          }
          unitPrice {
            amount
            currencyCode
          }
          image {
            url
            altText
            width
            height
          }
          selectedOptions {
            name
            value
          }
        }
      }
    }
  }
}
"#;

/// Query for a single product page, addressed by URL handle.
pub const PRODUCT_BY_HANDLE_QUERY: &str = r#"
query ProductByHandle($handle: String!, $country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  product(handle: $handle) {
    id
    title
    vendor
    handle
    description
    descriptionHtml
    options {
      name
      optionValues {
        name
        swatch {
          color
          image {
            previewImage {
              url
            }
          }
        }
      }
    }
    variants(first: 5) {
      nodes {
        id
        title
        availableForSale
        sku
        price {
          amount
          currencyCode
        }
        compareAtPrice {
          amount
          currencyCode
        }
        unitPrice {
          amount
          currencyCode
        }
        image {
          url
          altText
          width
          height
        }
        selectedOptions {
          name
          value
        }
      }
    }
  }
}
"#;

/// Localization context forwarded with every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    /// ISO 3166-1 alpha-2 country code (e.g., "US").
    pub country: String,
    /// ISO 639-1 language code, uppercased (e.g., "EN").
    pub language: String,
}

impl Localization {
    pub fn new(country: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            language: language.into(),
        }
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::new("US", "EN")
    }
}

/// Build the variables object for [`RECOMMENDED_PRODUCTS_QUERY`].
/// `first` is clamped to [`MAX_RECOMMENDED`].
pub fn recommended_products_variables(
    first: usize,
    localization: &Localization,
) -> serde_json::Value {
    serde_json::json!({
        "first": first.min(MAX_RECOMMENDED),
        "country": localization.country,
        "language": localization.language,
    })
}

/// Build the variables object for [`PRODUCT_BY_HANDLE_QUERY`].
pub fn product_by_handle_variables(handle: &str, localization: &Localization) -> serde_json::Value {
    serde_json::json!({
        "handle": handle,
        "country": localization.country,
        "language": localization.language,
    })
}
