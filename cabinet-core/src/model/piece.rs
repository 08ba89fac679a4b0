//! Piece definition representing a single named panel of a preset cabinet.

use serde::{Deserialize, Serialize};

use super::{MaterialItem, PanelSize};
use crate::lenient;

/// A flat part of a cabinet, as carried by legacy and preset records.
///
/// Every field except the name is optional; a piece missing its material or
/// either side contributes nothing to cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Part label ("Side", "Shelf"...).
    #[serde(default, deserialize_with = "lenient::label")]
    pub name: String,
    /// Material the piece is cut from.
    #[serde(
        default,
        deserialize_with = "lenient::record",
        skip_serializing_if = "Option::is_none"
    )]
    pub material: Option<MaterialItem>,
    /// Piece width in mm.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f64>,
    /// Piece height in mm.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f64>,
    /// Number of identical pieces; absent means one.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<f64>,
}

impl Piece {
    /// Create a piece of the given material and size.
    pub fn new(name: impl Into<String>, material: MaterialItem, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            material: Some(material),
            width: Some(width),
            height: Some(height),
            quantity: None,
        }
    }

    /// Set the number of identical pieces.
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Panel size, present only when both sides are known.
    pub fn size(&self) -> Option<PanelSize> {
        Some(PanelSize::new(self.width?, self.height?))
    }

    /// Effective quantity.
    pub fn quantity(&self) -> f64 {
        self.quantity.unwrap_or(1.0)
    }
}
