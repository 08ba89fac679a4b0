//! Material cost of rectangular pieces.

use crate::model::{MaterialItem, PanelSize, Piece};

/// Cost of `quantity` panels of `size` cut from `material`.
///
/// Returns 0 when either the material or the size is missing.
pub fn piece_cost(material: Option<&MaterialItem>, size: Option<PanelSize>, quantity: f64) -> f64 {
    match (material, size) {
        (Some(material), Some(size)) => material.price * size.area() * quantity,
        _ => 0.0,
    }
}

/// Sum of [`piece_cost`] over a list of pieces.
pub fn cabinet_piece_costs(pieces: &[Piece]) -> f64 {
    pieces
        .iter()
        .map(|piece| piece_cost(piece.material.as_ref(), piece.size(), piece.quantity()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    fn pal() -> MaterialItem {
        MaterialItem::new("pal-18", "PAL 18mm", 100.0)
    }

    #[test]
    fn test_piece_cost_formula() {
        let cost = piece_cost(Some(&pal()), Some(PanelSize::new(600.0, 500.0)), 2.0);
        assert!(approx_eq(cost, 100.0 * 0.6 * 0.5 * 2.0));
    }

    #[test]
    fn test_piece_cost_missing_inputs() {
        assert_eq!(piece_cost(None, Some(PanelSize::new(600.0, 500.0)), 1.0), 0.0);
        assert_eq!(piece_cost(Some(&pal()), None, 1.0), 0.0);
    }

    #[test]
    fn test_cabinet_piece_costs_sums() {
        let pieces = vec![
            Piece::new("Side", pal(), 560.0, 720.0).with_quantity(2.0),
            Piece::new("Top", pal(), 900.0, 560.0),
            Piece {
                name: "Unknown".to_string(),
                ..Default::default()
            },
        ];
        let expected = 100.0 * 0.4032 * 2.0 + 100.0 * 0.504;
        assert!(approx_eq(cabinet_piece_costs(&pieces), expected));
    }

    #[test]
    fn test_cabinet_piece_costs_empty() {
        assert_eq!(cabinet_piece_costs(&[]), 0.0);
    }
}
