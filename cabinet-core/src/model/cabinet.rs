//! The cabinet entity: one furniture unit being configured and priced.

use serde::{Deserialize, Serialize};

use super::{AccessoryItem, Dimensions, MaterialItem, Piece};
use crate::identity::generate_id;
use crate::lenient;
use crate::normalize::{normalize, PartialCabinet};
use crate::pricing::CabinetCost;

/// A catalog material chosen for a cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    /// Catalog material id.
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::label")]
    pub name: String,
    #[serde(default = "one", deserialize_with = "lenient::quantity")]
    pub quantity: f64,
}

impl MaterialLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Select a catalog material for a cabinet.
    pub fn from_item(item: &MaterialItem, quantity: f64) -> Self {
        Self::new(item.id.clone(), item.name.clone(), quantity)
    }
}

/// An accessory chosen for a cabinet, with the amount used on this cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryLine {
    /// Catalog accessory id.
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::label")]
    pub name: String,
    #[serde(default = "one", deserialize_with = "lenient::quantity")]
    pub quantity: f64,
    /// Unit price.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: f64,
}

impl AccessoryLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Select a catalog accessory for a cabinet. The catalog's stock
    /// quantity is replaced by the amount used on this cabinet.
    pub fn from_item(item: &AccessoryItem, quantity: f64) -> Self {
        Self::new(item.id.clone(), item.name.clone(), quantity, item.price)
    }
}

fn one() -> f64 {
    1.0
}

/// A fully populated cabinet record.
///
/// Geometry is held once. On the wire the record carries both a nested
/// `dimensions` object and top-level `width`/`height`/`depth` fields, and
/// they always agree. Any record read back is passed through [`normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PartialCabinet", into = "PartialCabinet")]
pub struct Cabinet {
    /// Stable identifier assigned at creation.
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub(crate) dimensions: Dimensions,
    pub materials: Vec<MaterialLine>,
    pub accessories: Vec<AccessoryLine>,
    pub pieces: Vec<Piece>,
    /// Sale price. May be set by an operator and differ from `total_cost`.
    pub price: f64,
    /// Last composed material + accessory + hinge cost.
    pub total_cost: f64,
    /// Precomputed material cost, preferred by project totals when present.
    pub material_cost: Option<f64>,
    /// Precomputed accessory cost, preferred by project totals when present.
    pub accessory_cost: Option<f64>,
    pub image: Option<String>,
}

impl Default for Cabinet {
    fn default() -> Self {
        normalize(None)
    }
}

impl Cabinet {
    /// Create a default cabinet with a fresh id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named cabinet of the given size.
    pub fn with_dimensions(name: impl Into<String>, dimensions: Dimensions) -> Self {
        let mut cabinet = Self::new();
        cabinet.name = name.into();
        cabinet.dimensions = dimensions;
        cabinet
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    pub fn height(&self) -> f64 {
        self.dimensions.height
    }

    pub fn depth(&self) -> f64 {
        self.dimensions.depth
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }

    pub fn set_width(&mut self, width: f64) {
        self.dimensions.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        self.dimensions.height = height;
    }

    pub fn set_depth(&mut self, depth: f64) {
        self.dimensions.depth = depth;
    }

    /// Add a material, merging quantities when the id is already listed.
    pub fn add_material(&mut self, line: MaterialLine) {
        match self.materials.iter_mut().find(|m| m.id == line.id) {
            Some(existing) => existing.quantity += line.quantity,
            None => self.materials.push(line),
        }
    }

    /// Remove a material by id. Returns whether anything was removed.
    pub fn remove_material(&mut self, id: &str) -> bool {
        let before = self.materials.len();
        self.materials.retain(|m| m.id != id);
        self.materials.len() != before
    }

    /// Insert or replace an accessory line. A quantity of zero or less
    /// removes the accessory instead.
    pub fn set_accessory(&mut self, line: AccessoryLine) {
        if line.quantity <= 0.0 {
            self.remove_accessory(&line.id);
            return;
        }
        match self.accessories.iter_mut().find(|a| a.id == line.id) {
            Some(existing) => *existing = line,
            None => self.accessories.push(line),
        }
    }

    /// Remove an accessory by id. Returns whether anything was removed.
    pub fn remove_accessory(&mut self, id: &str) -> bool {
        let before = self.accessories.len();
        self.accessories.retain(|a| a.id != id);
        self.accessories.len() != before
    }

    /// Copy every field under a fresh id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: generate_id(),
            ..self.clone()
        }
    }

    /// Record a composed cost. The sale price is left untouched.
    pub fn apply_cost(&mut self, cost: &CabinetCost) {
        self.total_cost = cost.total;
        self.material_cost = Some(cost.material_cost);
        self.accessory_cost = Some(cost.accessory_cost);
    }
}
