//! Swatch view-models for the color option row.

use crate::state::CardState;
use vitrine_catalog::{Product, COLOR_OPTION};

/// How a swatch control is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwatchFill {
    /// Flat CSS color token.
    Color(String),
    /// Preview image URL.
    Image(String),
    /// No swatch metadata; rendered as a neutral disc.
    None,
}

/// One renderable swatch for a color option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchView {
    /// The option value this swatch activates.
    pub value: String,
    /// Visual fill.
    pub fill: SwatchFill,
    /// Whether the value matches the selected variant's color.
    pub is_selected: bool,
}

/// Build the swatch row for a product's color option: one view per
/// option value, in option order. Empty when the product has no color
/// option. A swatch's image wins over its flat color when both are set.
pub fn color_swatches(product: &Product, state: &CardState) -> Vec<SwatchView> {
    let Some(option) = product.color_option() else {
        return Vec::new();
    };
    let selected_color = product.variants[state.selected()].option_value(COLOR_OPTION);

    option
        .values
        .iter()
        .map(|value| {
            let fill = match &value.swatch {
                Some(swatch) => match (&swatch.image_url, &swatch.color) {
                    (Some(url), _) => SwatchFill::Image(url.clone()),
                    (None, Some(color)) => SwatchFill::Color(color.clone()),
                    (None, None) => SwatchFill::None,
                },
                None => SwatchFill::None,
            };
            let is_selected = selected_color
                .map(|color| color.eq_ignore_ascii_case(&value.name))
                .unwrap_or(false);
            SwatchView {
                value: value.name.clone(),
                fill,
                is_selected,
            }
        })
        .collect()
}
