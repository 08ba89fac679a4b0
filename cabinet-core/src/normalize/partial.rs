//! Loosely typed cabinet record as it arrives from storage or forms.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::model::{AccessoryLine, Cabinet, MaterialLine, Piece};

/// Nested geometry of a partial record; each side may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialDimensions {
    #[serde(default, deserialize_with = "lenient::number")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub depth: Option<f64>,
}

/// A cabinet record where any field may be missing or unreadable.
///
/// This is also the wire shape of [`Cabinet`]: a serialized cabinet carries
/// every field, with geometry both nested and at the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCabinet {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub subcategory: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub depth: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::record",
        skip_serializing_if = "Option::is_none"
    )]
    pub dimensions: Option<PartialDimensions>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub materials: Option<Vec<MaterialLine>>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessories: Option<Vec<AccessoryLine>>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub pieces: Option<Vec<Piece>>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_cost: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub material_cost: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessory_cost: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl From<Cabinet> for PartialCabinet {
    fn from(cabinet: Cabinet) -> Self {
        let dims = cabinet.dimensions();
        Self {
            id: Some(cabinet.id),
            name: Some(cabinet.name),
            category: Some(cabinet.category),
            subcategory: Some(cabinet.subcategory),
            width: Some(dims.width),
            height: Some(dims.height),
            depth: Some(dims.depth),
            dimensions: Some(PartialDimensions {
                width: Some(dims.width),
                height: Some(dims.height),
                depth: Some(dims.depth),
            }),
            materials: Some(cabinet.materials),
            accessories: Some(cabinet.accessories),
            pieces: Some(cabinet.pieces),
            price: Some(cabinet.price),
            total_cost: Some(cabinet.total_cost),
            material_cost: cabinet.material_cost,
            accessory_cost: cabinet.accessory_cost,
            image: cabinet.image,
        }
    }
}

impl From<PartialCabinet> for Cabinet {
    fn from(partial: PartialCabinet) -> Self {
        super::normalize(Some(partial))
    }
}
