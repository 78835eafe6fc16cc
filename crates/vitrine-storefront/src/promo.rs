//! Promotional sale decoration.
//!
//! A seeded sampler picks a stable subset of products and gives their
//! variants a synthetic compare-at price, so sale styling can be
//! exercised against catalogs that carry none. The sampler is pure: the
//! same seed and product id always make the same decision, which keeps
//! renders reproducible across server and client.

use vitrine_catalog::{Money, Product};

/// Synthetic compare-at prices are set to this percentage of the
/// variant price.
const COMPARE_AT_PERCENT: i64 = 150;

/// Deterministic per-product sale decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleSampler {
    seed: u64,
}

impl SaleSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Whether the product with this id is part of the sale sample.
    pub fn samples(&self, product_id: &str) -> bool {
        stable_hash(self.seed, product_id.as_bytes()) & 1 == 0
    }
}

/// Controls which promotional decorations run after a catalog load.
///
/// The default configuration is inert; decoration only happens when a
/// sampler is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromoConfig {
    sample_sale: Option<SaleSampler>,
}

impl PromoConfig {
    /// Enable seeded sale decoration.
    pub fn with_sale_sampler(mut self, seed: u64) -> Self {
        self.sample_sale = Some(SaleSampler::new(seed));
        self
    }

    /// Decorate sampled products in place.
    ///
    /// Variants that already carry a compare-at price keep it; only
    /// missing ones are synthesized.
    pub fn apply(&self, products: &mut [Product]) {
        let Some(sampler) = self.sample_sale else {
            return;
        };
        for product in products.iter_mut() {
            if !sampler.samples(product.id.as_str()) {
                continue;
            }
            for variant in product.variants.iter_mut() {
                if variant.compare_at_price.is_none() {
                    variant.compare_at_price = Some(Money::new(
                        variant.price.amount_cents * COMPARE_AT_PERCENT / 100,
                        variant.price.currency,
                    ));
                }
            }
        }
    }
}

/// FNV-1a over the seed bytes followed by the input bytes.
fn stable_hash(seed: u64, bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in seed.to_le_bytes().iter().chain(bytes) {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
