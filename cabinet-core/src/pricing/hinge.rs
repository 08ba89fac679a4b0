//! Hinge count and cost from cabinet width.

use serde::Serialize;

use crate::config::{BASE_HINGE_COUNT, HINGE_SPAN_MM};

/// Hinges needed for a cabinet and what they cost.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HingeCost {
    pub quantity: u32,
    pub cost: f64,
}

/// Two hinges cover a cabinet up to 600 mm wide; every further full 600 mm
/// adds one. Widths below 600 (including negative or NaN) still get two.
/// The count saturates at `u32::MAX` for absurdly wide or infinite widths.
pub fn hinge_cost(width: f64, unit_price: f64) -> HingeCost {
    let extra = ((width - HINGE_SPAN_MM) / HINGE_SPAN_MM).floor().max(0.0);
    let quantity = BASE_HINGE_COUNT.saturating_add(extra as u32);
    HingeCost {
        quantity,
        cost: quantity as f64 * unit_price,
    }
}
