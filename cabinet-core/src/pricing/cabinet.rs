//! Composition of a single cabinet's cost from materials, accessories, and hinges.

use serde::Serialize;
use tracing::{debug, warn};

use super::{accessory_cost, cabinet_piece_costs, hinge_cost, piece_cost, HingeCost};
use crate::model::{Cabinet, Dimensions, MaterialItem, PanelSize};

/// A material id listed on a cabinet that the catalog does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedMaterial {
    pub cabinet_id: String,
    pub material_id: String,
}

impl std::fmt::Display for UnresolvedMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cabinet {}: material {} not found in catalog",
            self.cabinet_id, self.material_id
        )
    }
}

/// Cost breakdown of one cabinet.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetCost {
    pub material_cost: f64,
    pub accessory_cost: f64,
    pub hinge: HingeCost,
    /// Material + accessory + hinge cost; becomes the cabinet's `total_cost`.
    pub total: f64,
    /// Listed materials that contributed nothing because they were not found.
    pub unresolved: Vec<UnresolvedMaterial>,
}

/// Panels of the six-sided box estimate with their counts.
fn box_panels(dims: &Dimensions) -> [(PanelSize, f64); 4] {
    [
        // bottom
        (dims.top_panel(), 1.0),
        // top
        (dims.top_panel(), 1.0),
        (dims.side_panel(), 2.0),
        (dims.back_panel(), 1.0),
    ]
}

/// Material cost of a cabinet priced as a plain box of one material.
pub fn box_material_cost(dims: &Dimensions, material: Option<&MaterialItem>) -> f64 {
    box_panels(dims)
        .iter()
        .map(|(size, count)| piece_cost(material, Some(*size), *count))
        .sum()
}

/// Compose the cost of a cabinet.
///
/// Each listed material is priced as one `width x depth` panel per unit of
/// quantity, whatever part of the cabinet it stands for. A cabinet listing
/// no materials is priced as a six-panel box of `fallback`. Accessories and
/// hinges are added on top. The cabinet's sale price is not consulted.
pub fn compose_cabinet_cost(
    cabinet: &Cabinet,
    catalog: &[MaterialItem],
    fallback: Option<&MaterialItem>,
    hinge_price: f64,
) -> CabinetCost {
    let dims = cabinet.dimensions();
    let mut unresolved = Vec::new();

    let material_cost = if cabinet.materials.is_empty() {
        box_material_cost(&dims, fallback)
    } else {
        let panel = PanelSize::new(dims.width, dims.depth);
        cabinet
            .materials
            .iter()
            .map(|line| match catalog.iter().find(|m| m.id == line.id) {
                Some(material) => piece_cost(Some(material), Some(panel), line.quantity),
                None => {
                    let missing = UnresolvedMaterial {
                        cabinet_id: cabinet.id.clone(),
                        material_id: line.id.clone(),
                    };
                    warn!("{}", missing);
                    unresolved.push(missing);
                    0.0
                }
            })
            .sum()
    };

    let accessory_cost = accessory_cost(&cabinet.accessories);
    let hinge = hinge_cost(dims.width, hinge_price);
    let total = material_cost + accessory_cost + hinge.cost;

    debug!(
        "Cabinet {}: materials {:.2}, accessories {:.2}, {} hinges {:.2}, total {:.2}",
        cabinet.id, material_cost, accessory_cost, hinge.quantity, hinge.cost, total
    );

    CabinetCost {
        material_cost,
        accessory_cost,
        hinge,
        total,
        unresolved,
    }
}

/// Compose the cost of a preset cabinet from its own pieces instead of a
/// material list. Accessories and hinges are added as for any cabinet.
pub fn compose_preset_cost(cabinet: &Cabinet, hinge_price: f64) -> CabinetCost {
    let material_cost = cabinet_piece_costs(&cabinet.pieces);
    let accessory_cost = accessory_cost(&cabinet.accessories);
    let hinge = hinge_cost(cabinet.width(), hinge_price);
    let total = material_cost + accessory_cost + hinge.cost;

    debug!(
        "Preset cabinet {}: {} pieces {:.2}, total {:.2}",
        cabinet.id,
        cabinet.pieces.len(),
        material_cost,
        total
    );

    CabinetCost {
        material_cost,
        accessory_cost,
        hinge,
        total,
        unresolved: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{float_cmp::approx_eq, DEFAULT_HINGE_PRICE};
    use crate::model::{AccessoryLine, MaterialLine, Piece};

    fn catalog() -> Vec<MaterialItem> {
        vec![
            MaterialItem::new("pal", "PAL 18mm", 100.0),
            MaterialItem::new("hdf", "HDF 3mm", 20.0),
        ]
    }

    fn base_900() -> Cabinet {
        Cabinet::with_dimensions("Base 900", Dimensions::new(900.0, 720.0, 560.0))
    }

    // ==================== fallback box tests ====================

    #[test]
    fn test_fallback_box_scenario() {
        let cabinet = base_900();
        let material = MaterialItem::new("pal", "PAL 18mm", 100.0);
        let cost = compose_cabinet_cost(&cabinet, &[], Some(&material), DEFAULT_HINGE_PRICE);

        assert!(approx_eq(cost.material_cost, 246.24));
        assert_eq!(cost.hinge.quantity, 2);
        assert_eq!(cost.hinge.cost, 30.0);
        assert!(approx_eq(cost.total, 276.24));
    }

    #[test]
    fn test_fallback_without_material_costs_only_hinges() {
        let cabinet = base_900();
        let cost = compose_cabinet_cost(&cabinet, &catalog(), None, DEFAULT_HINGE_PRICE);
        assert_eq!(cost.material_cost, 0.0);
        assert_eq!(cost.total, 30.0);
    }

    // ==================== explicit material tests ====================

    #[test]
    fn test_listed_materials_use_width_by_depth() {
        let mut cabinet = base_900();
        cabinet.add_material(MaterialLine::new("pal", "PAL 18mm", 5.0));
        cabinet.add_material(MaterialLine::new("hdf", "HDF 3mm", 1.0));
        let cost = compose_cabinet_cost(&cabinet, &catalog(), None, DEFAULT_HINGE_PRICE);

        let panel = 0.9 * 0.56;
        assert!(approx_eq(cost.material_cost, 100.0 * panel * 5.0 + 20.0 * panel));
        assert!(cost.unresolved.is_empty());
    }

    #[test]
    fn test_listed_materials_ignore_fallback() {
        let mut cabinet = base_900();
        cabinet.add_material(MaterialLine::new("hdf", "HDF 3mm", 1.0));
        let fallback = MaterialItem::new("pal", "PAL 18mm", 100.0);
        let cost = compose_cabinet_cost(&cabinet, &catalog(), Some(&fallback), DEFAULT_HINGE_PRICE);
        assert!(approx_eq(cost.material_cost, 20.0 * 0.504));
    }

    #[test]
    fn test_unknown_material_contributes_zero() {
        let mut cabinet = base_900();
        cabinet.add_material(MaterialLine::new("ghost", "Missing", 3.0));
        cabinet.add_material(MaterialLine::new("pal", "PAL 18mm", 1.0));
        let cost = compose_cabinet_cost(&cabinet, &catalog(), None, DEFAULT_HINGE_PRICE);

        assert!(approx_eq(cost.material_cost, 50.4));
        assert_eq!(cost.unresolved.len(), 1);
        assert_eq!(cost.unresolved[0].material_id, "ghost");
        assert_eq!(cost.unresolved[0].cabinet_id, cabinet.id);
    }

    // ==================== accessories and hinges ====================

    #[test]
    fn test_accessories_and_wide_cabinet_hinges() {
        let mut cabinet = Cabinet::with_dimensions("Wide", Dimensions::new(1800.0, 720.0, 560.0));
        cabinet.set_accessory(AccessoryLine::new("h", "Handle", 2.0, 12.5));
        let cost = compose_cabinet_cost(&cabinet, &catalog(), None, 10.0);

        assert_eq!(cost.accessory_cost, 25.0);
        assert_eq!(cost.hinge.quantity, 4);
        assert_eq!(cost.total, 65.0);
    }

    #[test]
    fn test_compose_does_not_touch_price() {
        let mut cabinet = base_900();
        cabinet.price = 1234.0;
        let _ = compose_cabinet_cost(&cabinet, &catalog(), None, DEFAULT_HINGE_PRICE);
        assert_eq!(cabinet.price, 1234.0);
    }

    // ==================== preset tests ====================

    #[test]
    fn test_preset_cost_prices_pieces() {
        let mut cabinet = base_900();
        let pal = MaterialItem::new("pal", "PAL 18mm", 100.0);
        cabinet.pieces = vec![
            Piece::new("Side", pal.clone(), 560.0, 720.0).with_quantity(2.0),
            Piece::new("Bottom", pal, 900.0, 560.0),
        ];
        cabinet.set_accessory(AccessoryLine::new("h", "Handle", 1.0, 8.0));
        let cost = compose_preset_cost(&cabinet, DEFAULT_HINGE_PRICE);

        assert!(approx_eq(cost.material_cost, 80.64 + 50.4));
        assert_eq!(cost.accessory_cost, 8.0);
        assert!(approx_eq(cost.total, 80.64 + 50.4 + 8.0 + 30.0));
    }
}
