//! The degrade-to-empty loading boundary.
//!
//! Homepage recommendations are decorative; when the backend is
//! unreachable or answers garbage, the section renders with no cards
//! rather than an error state. No retry, no error UI. This is where
//! transport and parse failures collapse into `None`.

use vitrine_catalog::Product;

use crate::promo::PromoConfig;
use crate::StorefrontClient;

/// Load recommended products, or `None` when anything fails.
///
/// Failures are logged and swallowed; callers render an empty section
/// either way.
pub async fn load_recommended(
    client: &StorefrontClient,
    first: usize,
    promo: &PromoConfig,
) -> Option<Vec<Product>> {
    match client.recommended_products(first).await {
        Ok(mut products) => {
            promo.apply(&mut products);
            tracing::debug!(count = products.len(), "loaded recommended products");
            Some(products)
        }
        Err(err) => {
            tracing::warn!(error = %err, "recommended products unavailable, rendering empty");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorefrontConfig;

    #[test]
    fn test_load_degrades_to_none_on_failure() {
        // The host-side transport stub answers every request with an
        // empty body, which fails JSON parsing. The loader must swallow
        // that and hand back None.
        let client = StorefrontClient::new(StorefrontConfig::new(
            "demo.myshopify.com",
            "test-token",
        ));
        let result = futures::executor::block_on(load_recommended(
            &client,
            4,
            &PromoConfig::default(),
        ));
        assert!(result.is_none());
    }
}
