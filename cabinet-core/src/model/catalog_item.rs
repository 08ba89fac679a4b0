//! Catalog reference data: materials priced per m² and accessories priced per unit.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A sheet material. Immutable reference data looked up by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::label")]
    pub name: String,
    /// Price per square meter.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: f64,
    /// Sheet thickness in mm.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub thickness: Option<f64>,
}

impl MaterialItem {
    /// Create a material without thickness.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            thickness: None,
        }
    }

    /// Set the sheet thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }
}

/// A catalog accessory (handle, rail, leg...).
///
/// In the catalog `quantity` is stock on hand; it is never used for pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryItem {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::label")]
    pub name: String,
    /// Price per unit.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub quantity: f64,
}

impl AccessoryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}
