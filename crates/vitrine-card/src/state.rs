//! Card state machine: variant selection and the hover preview cycle.

use std::time::Duration;
use thiserror::Error;
use vitrine_catalog::{Product, COLOR_OPTION};

/// Interval between hover cycle advances.
pub const CYCLE_INTERVAL: Duration = Duration::from_millis(2000);

/// Errors that can occur when building card state.
#[derive(Error, Debug)]
pub enum CardError {
    /// The product has no variants to select from.
    #[error("Product has no variants")]
    NoVariants,
}

/// Hover phase of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    /// Pointer is outside the card.
    Idle,
    /// Pointer is inside the card; no cycle tick has fired yet.
    Hovering,
    /// Pointer is inside and the cycle has advanced to this variant index.
    Previewing(usize),
}

impl HoverState {
    /// Whether the pointer is currently over the card.
    pub fn is_hovering(&self) -> bool {
        !matches!(self, HoverState::Idle)
    }

    /// The preview index, once the cycle has advanced.
    pub fn preview_index(&self) -> Option<usize> {
        match self {
            HoverState::Previewing(index) => Some(*index),
            _ => None,
        }
    }
}

/// Per-card state: which variant is selected and which is hover-previewed.
///
/// One instance exists per rendered card, created on mount from a product
/// snapshot and mutated only by pointer enter/leave, swatch clicks, and
/// the cycle tick. All methods taking a [`Product`] expect the snapshot
/// the state was built from; variant indices held here index into that
/// snapshot's variant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    /// Number of variants in the product snapshot.
    variant_count: usize,
    /// Index of the selected variant.
    selected: usize,
    /// Hover phase.
    hover: HoverState,
}

impl CardState {
    /// Build state for a product snapshot, selecting the product's
    /// initial variant. Fails when the product has no variants.
    pub fn new(product: &Product) -> Result<Self, CardError> {
        if product.variants.is_empty() {
            return Err(CardError::NoVariants);
        }
        Ok(Self {
            variant_count: product.variants.len(),
            selected: product.initial_variant_index(),
            hover: HoverState::Idle,
        })
    }

    /// Number of variants in the snapshot this card renders.
    pub fn variant_count(&self) -> usize {
        self.variant_count
    }

    /// Index of the selected variant.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Current hover phase.
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Index of the variant the card currently displays: the hover
    /// preview once the cycle has advanced, the selection otherwise.
    pub fn displayed_index(&self) -> usize {
        self.hover.preview_index().unwrap_or(self.selected)
    }

    /// Whether a cycle timer should be running: pointer over the card and
    /// more than one variant to cycle through. The rendering layer checks
    /// this when it arms the timer, not inside the tick callback.
    pub fn wants_cycle(&self) -> bool {
        self.hover.is_hovering() && self.variant_count > 1
    }

    /// Pointer entered the card. Nothing changes visually until the first
    /// tick fires. Re-entry while already hovering is a no-op.
    pub fn pointer_enter(&mut self) {
        if self.hover == HoverState::Idle {
            self.hover = HoverState::Hovering;
        }
    }

    /// Pointer left the card. Ends the cycle; the display immediately
    /// reverts to the selection.
    pub fn pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
    }

    /// One cycle tick: advance the preview from the currently displayed
    /// variant to the next one, wrapping at the end of the list. No-op
    /// unless a cycle is active.
    pub fn tick(&mut self) {
        if !self.wants_cycle() {
            return;
        }
        let next = (self.displayed_index() + 1) % self.variant_count;
        self.hover = HoverState::Previewing(next);
    }

    /// Select the first variant whose color option matches `value`,
    /// case-insensitively. A match becomes the selection and ends any
    /// active hover cycle; no match leaves the state untouched. An
    /// unmatched value is a silent no-op, not an error.
    pub fn select_by_option_value(&mut self, product: &Product, value: &str) {
        if let Some(index) = product.variant_index_by_option(COLOR_OPTION, value) {
            self.selected = index;
            self.hover = HoverState::Idle;
        }
    }
}
