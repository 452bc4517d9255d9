//! Orientation classification from probed dimensions.
//!
//! The orientation decides which sizing rule the layout engine applies:
//! portrait pictures are pinned to the configured height, landscape pictures
//! to the configured width. Square images classify as portrait, so they are
//! height-bound.

use crate::probe::Dimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Classify dimensions by aspect. `width <= height` is portrait, including
/// the square case. Pure; total for all dimensions the prober can produce
/// (both values non-zero).
pub fn classify(dims: Dimensions) -> Orientation {
    debug_assert!(dims.height > 0, "prober guarantees non-zero height");
    if dims.width <= dims.height {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    }
}
