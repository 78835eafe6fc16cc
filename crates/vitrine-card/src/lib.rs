//! Product card interaction state for Vitrine storefronts.
//!
//! A listing page renders one card per product. Each card tracks which
//! variant is selected, which variant is hover-previewed, and cycles the
//! preview on a timer while the pointer stays over the card. This crate
//! models that behavior as plain state types with no UI-framework or
//! timer dependencies, so the logic is unit-testable and the rendering
//! layer only wires events:
//!
//! - [`CardState`]: the per-card state machine (selection, hover, tick)
//! - [`CardDisplay`]: resolution of what the card shows right now
//! - [`color_swatches`]: view-models for the color swatch row
//!
//! The rendering layer owns the actual interval timer; it arms one when
//! [`CardState::wants_cycle`] holds, calls [`CardState::tick`] on each
//! fire, and cancels the handle whenever hover status or selection
//! change and on unmount.

pub mod display;
pub mod state;
pub mod swatch;

pub use display::CardDisplay;
pub use state::{CardError, CardState, HoverState, CYCLE_INTERVAL};
pub use swatch::{color_swatches, SwatchFill, SwatchView};
