//! Project-wide totals with labor, transport, markup, and VAT.

use serde::Serialize;

use super::{accessory_cost, cabinet_piece_costs};
use crate::config::PricingSettings;
use crate::model::Cabinet;

/// Every intermediate figure of a project quote.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub material_cost: f64,
    pub accessory_cost: f64,
    /// Materials plus accessories.
    pub base: f64,
    pub manopera_cost: f64,
    pub transport_cost: f64,
    pub adaos_cost: f64,
    pub subtotal: f64,
    pub tva_cost: f64,
    pub total: f64,
}

/// Material cost of a cabinet as seen by project totals: the stored figure
/// when present, otherwise its pieces.
pub fn cabinet_material_cost(cabinet: &Cabinet) -> f64 {
    cabinet
        .material_cost
        .unwrap_or_else(|| cabinet_piece_costs(&cabinet.pieces))
}

/// Accessory cost of a cabinet as seen by project totals.
pub fn cabinet_accessory_cost(cabinet: &Cabinet) -> f64 {
    cabinet
        .accessory_cost
        .unwrap_or_else(|| accessory_cost(&cabinet.accessories))
}

/// Sum of material costs across cabinets.
pub fn project_material_total(cabinets: &[Cabinet]) -> f64 {
    cabinets.iter().map(cabinet_material_cost).sum()
}

/// Sum of accessory costs across cabinets.
pub fn project_accessory_total(cabinets: &[Cabinet]) -> f64 {
    cabinets.iter().map(cabinet_accessory_cost).sum()
}

/// Apply surcharges and VAT to a project's material and accessory cost.
///
/// Labor, transport, and markup are each a percentage of the same base and
/// are not compounded. VAT applies to the subtotal.
pub fn project_total(
    material_cost: f64,
    accessory_cost: f64,
    settings: &PricingSettings,
    include_tva: bool,
) -> PriceBreakdown {
    let base = material_cost + accessory_cost;
    let manopera_cost = base * settings.manopera / 100.0;
    let transport_cost = base * settings.transport / 100.0;
    let adaos_cost = base * settings.adaos / 100.0;
    let subtotal = base + manopera_cost + transport_cost + adaos_cost;
    let tva_cost = if include_tva {
        subtotal * settings.tva / 100.0
    } else {
        0.0
    };

    PriceBreakdown {
        material_cost,
        accessory_cost,
        base,
        manopera_cost,
        transport_cost,
        adaos_cost,
        subtotal,
        tva_cost,
        total: subtotal + tva_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::{AccessoryLine, MaterialItem, Piece};

    fn settings() -> PricingSettings {
        PricingSettings::new(19.0, 15.0, 5.0, 10.0)
    }

    fn cabinet_with_pieces(price: f64) -> Cabinet {
        let mut cabinet = Cabinet::new();
        let material = MaterialItem::new("pal", "PAL", price);
        cabinet.pieces = vec![
            Piece::new("Side", material.clone(), 560.0, 720.0).with_quantity(2.0),
            Piece::new("Back", material, 600.0, 720.0),
        ];
        cabinet
    }

    // ==================== project_total tests ====================

    #[test]
    fn test_percentages_are_not_compounded() {
        let breakdown = project_total(1000.0, 0.0, &settings(), true);
        assert!(approx_eq(breakdown.base, 1000.0));
        assert!(approx_eq(breakdown.manopera_cost, 150.0));
        assert!(approx_eq(breakdown.transport_cost, 50.0));
        assert!(approx_eq(breakdown.adaos_cost, 100.0));
        assert!(approx_eq(breakdown.subtotal, 1300.0));
        assert!(approx_eq(breakdown.tva_cost, 247.0));
        assert!(approx_eq(breakdown.total, 1547.0));
    }

    #[test]
    fn test_without_tva() {
        let breakdown = project_total(600.0, 400.0, &settings(), false);
        assert_eq!(breakdown.tva_cost, 0.0);
        assert!(approx_eq(breakdown.total, 1300.0));
    }

    #[test]
    fn test_zero_base() {
        let breakdown = project_total(0.0, 0.0, &settings(), true);
        assert_eq!(breakdown.total, 0.0);
    }

    // ==================== aggregation tests ====================

    #[test]
    fn test_material_total_is_additive() {
        let cabinets = vec![cabinet_with_pieces(100.0), cabinet_with_pieces(50.0)];
        let expected: f64 = cabinets.iter().map(|c| cabinet_piece_costs(&c.pieces)).sum();
        assert!(approx_eq(project_material_total(&cabinets), expected));
        assert!(approx_eq(
            project_material_total(&cabinets),
            project_material_total(&cabinets[..1]) + project_material_total(&cabinets[1..])
        ));
    }

    #[test]
    fn test_precomputed_costs_win() {
        let mut cabinet = cabinet_with_pieces(100.0);
        cabinet.material_cost = Some(10.0);
        cabinet.set_accessory(AccessoryLine::new("a", "Handle", 2.0, 5.0));
        assert_eq!(project_material_total(&[cabinet.clone()]), 10.0);
        assert_eq!(project_accessory_total(&[cabinet.clone()]), 10.0);

        cabinet.accessory_cost = Some(3.0);
        assert_eq!(project_accessory_total(&[cabinet]), 3.0);
    }

    #[test]
    fn test_empty_project() {
        assert_eq!(project_material_total(&[]), 0.0);
        assert_eq!(project_accessory_total(&[]), 0.0);
    }
}
