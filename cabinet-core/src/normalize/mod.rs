//! Cabinet normalization.
//!
//! Every cabinet crossing a boundary (created, edited, cloned, loaded) goes
//! through [`normalize`], which turns any partial record into a complete
//! [`Cabinet`]. Normalization never fails and is idempotent.

mod partial;

pub use partial::{PartialCabinet, PartialDimensions};

use serde_json::Value;
use tracing::warn;

use crate::config::DEFAULT_CABINET_NAME;
use crate::identity::generate_id;
use crate::model::{Cabinet, Dimensions};

/// Build a complete cabinet from a partial record.
///
/// With no input, returns a 600 x 720 x 560 cabinet with a fresh id. Otherwise
/// each side is taken from the top-level field, then from `dimensions`, then
/// 0. Missing collections become empty, missing costs 0, and a missing or
/// blank id is replaced by a fresh one.
pub fn normalize(partial: Option<PartialCabinet>) -> Cabinet {
    let Some(partial) = partial else {
        return Cabinet {
            id: generate_id(),
            name: DEFAULT_CABINET_NAME.to_string(),
            category: String::new(),
            subcategory: String::new(),
            dimensions: Dimensions::standard(),
            materials: Vec::new(),
            accessories: Vec::new(),
            pieces: Vec::new(),
            price: 0.0,
            total_cost: 0.0,
            material_cost: None,
            accessory_cost: None,
            image: None,
        };
    };

    let nested = partial.dimensions.unwrap_or_default();
    let dimensions = Dimensions::new(
        partial.width.or(nested.width).unwrap_or(0.0),
        partial.height.or(nested.height).unwrap_or(0.0),
        partial.depth.or(nested.depth).unwrap_or(0.0),
    );

    Cabinet {
        id: partial
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_id),
        name: partial.name.unwrap_or_default(),
        category: partial.category.unwrap_or_default(),
        subcategory: partial.subcategory.unwrap_or_default(),
        dimensions,
        materials: partial.materials.unwrap_or_default(),
        accessories: partial.accessories.unwrap_or_default(),
        pieces: partial.pieces.unwrap_or_default(),
        price: partial.price.unwrap_or(0.0),
        total_cost: partial.total_cost.unwrap_or(0.0),
        material_cost: partial.material_cost,
        accessory_cost: partial.accessory_cost,
        image: partial.image,
    }
}

/// Normalize an untyped record.
///
/// `null` and non-object values count as absent input.
pub fn normalize_value(value: &Value) -> Cabinet {
    if !value.is_object() {
        return normalize(None);
    }
    match serde_json::from_value::<PartialCabinet>(value.clone()) {
        Ok(partial) => normalize(Some(partial)),
        Err(err) => {
            warn!("Unreadable cabinet record, using defaults: {}", err);
            normalize(None)
        }
    }
}
