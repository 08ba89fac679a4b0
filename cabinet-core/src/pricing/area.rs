//! Surface area of rectangular panels.

use crate::config::MM_PER_M;
use crate::model::PanelSize;

/// Area in m² of a `width_mm` x `height_mm` rectangle.
///
/// Signs are not checked: a zero or negative side gives a zero or negative
/// area.
#[inline]
pub fn area_of(width_mm: f64, height_mm: f64) -> f64 {
    (width_mm / MM_PER_M) * (height_mm / MM_PER_M)
}

impl PanelSize {
    /// Area in m².
    pub fn area(&self) -> f64 {
        area_of(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    #[test]
    fn test_area_of_square_meter() {
        assert!(approx_eq(area_of(1000.0, 1000.0), 1.0));
    }

    #[test]
    fn test_area_of_panel() {
        assert!(approx_eq(area_of(900.0, 560.0), 0.504));
        assert!(approx_eq(PanelSize::new(560.0, 720.0).area(), 0.4032));
    }

    #[test]
    fn test_area_of_negative_side_propagates() {
        assert!(approx_eq(area_of(-500.0, 1000.0), -0.5));
        assert_eq!(area_of(0.0, 720.0), 0.0);
    }
}
