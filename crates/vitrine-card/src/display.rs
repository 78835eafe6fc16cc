//! Display resolution: what a card shows for its current state.

use crate::state::CardState;
use vitrine_catalog::{Image, Money, Product, ProductVariant};

/// Everything the card template paints: resolved image, prices, and
/// badge visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDisplay {
    /// Image of the displayed variant, when it has one.
    pub image: Option<Image>,
    /// Price of the displayed variant.
    pub price: Money,
    /// Compare-at price of the displayed variant, rendered struck
    /// through beside the price when present.
    pub compare_at_price: Option<Money>,
    /// Whether the sale badge overlay is shown. Keyed to the selected
    /// variant's compare-at price, not the hover preview; hovering a
    /// different variant never toggles the badge.
    pub show_sale_badge: bool,
}

impl CardState {
    /// The variant the card currently displays: the hover preview once
    /// the cycle has advanced, the selection otherwise.
    pub fn displayed_variant<'a>(&self, product: &'a Product) -> &'a ProductVariant {
        &product.variants[self.displayed_index()]
    }

    /// Resolve the display for the current state over the product
    /// snapshot this state was built from.
    pub fn display(&self, product: &Product) -> CardDisplay {
        let displayed = self.displayed_variant(product);
        let selected = &product.variants[self.selected()];
        CardDisplay {
            image: displayed.image.clone(),
            price: displayed.price,
            compare_at_price: displayed.compare_at_price,
            show_sale_badge: selected.compare_at_price.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::{
        Currency, OptionValue, ProductId, ProductOption, SelectedOption, VariantId,
    };

    fn make_variant(id: &str, color: &str, cents: i64) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(id),
            title: color.to_string(),
            available_for_sale: true,
            sku: None,
            price: Money::new(cents, Currency::USD),
            compare_at_price: None,
            unit_price: None,
            image: Some(Image::new(format!("https://cdn.example.com/{}.jpg", id))),
            selected_options: vec![SelectedOption::new("Color", color)],
        }
    }

    fn make_product(variants: Vec<ProductVariant>) -> Product {
        Product {
            id: ProductId::new("prod-1"),
            title: "Trail Jacket".to_string(),
            vendor: "Vitrine".to_string(),
            handle: "trail-jacket".to_string(),
            description: String::new(),
            description_html: String::new(),
            options: vec![ProductOption {
                name: "Color".to_string(),
                values: variants
                    .iter()
                    .map(|v| OptionValue {
                        name: v.title.clone(),
                        swatch: None,
                    })
                    .collect(),
            }],
            variants,
        }
    }

    #[test]
    fn test_display_follows_preview() {
        let product = make_product(vec![
            make_variant("v1", "Red", 1000),
            make_variant("v2", "Blue", 1200),
        ]);
        let mut state = CardState::new(&product).unwrap();
        state.pointer_enter();
        state.tick();

        let display = state.display(&product);
        assert_eq!(display.price.amount_cents, 1200);
        assert_eq!(
            display.image.unwrap().url,
            "https://cdn.example.com/v2.jpg"
        );
    }

    #[test]
    fn test_badge_pinned_to_selection() {
        let mut on_sale = make_variant("v1", "Red", 1000);
        on_sale.compare_at_price = Some(Money::new(1500, Currency::USD));
        let product = make_product(vec![on_sale, make_variant("v2", "Blue", 1200)]);
        let mut state = CardState::new(&product).unwrap();

        // Hovering onto the non-sale variant keeps the badge
        state.pointer_enter();
        state.tick();
        let display = state.display(&product);
        assert_eq!(display.price.amount_cents, 1200);
        assert!(display.compare_at_price.is_none());
        assert!(display.show_sale_badge);

        // Selecting the non-sale variant drops it
        state.select_by_option_value(&product, "Blue");
        let display = state.display(&product);
        assert!(!display.show_sale_badge);

        // And hovering back onto the sale variant does not restore it
        state.pointer_enter();
        state.tick();
        let display = state.display(&product);
        assert_eq!(display.price.amount_cents, 1000);
        assert!(!display.show_sale_badge);
    }

    #[test]
    fn test_red_blue_scenario() {
        let red = make_variant("1", "Red", 1000);
        let mut blue = make_variant("2", "Blue", 1200);
        blue.compare_at_price = Some(Money::new(800, Currency::USD));
        let product = make_product(vec![red, blue]);

        let mut state = CardState::new(&product).unwrap();
        let display = state.display(&product);
        assert_eq!(display.price.amount_cents, 1000);
        assert!(display.compare_at_price.is_none());
        assert!(!display.show_sale_badge);

        state.select_by_option_value(&product, "Blue");
        let display = state.display(&product);
        assert_eq!(display.price.amount_cents, 1200);
        assert_eq!(display.compare_at_price.unwrap().amount_cents, 800);
        assert!(display.show_sale_badge);
    }
}
