//! Cabinet geometry in millimeters.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DEPTH_MM, DEFAULT_HEIGHT_MM, DEFAULT_WIDTH_MM};

/// Outer size of a cabinet. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in mm.
    pub width: f64,
    /// Height in mm.
    pub height: f64,
    /// Depth in mm.
    pub depth: f64,
}

impl Dimensions {
    /// Create dimensions.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Size of a freshly created cabinet (600 x 720 x 560).
    pub fn standard() -> Self {
        Self::new(DEFAULT_WIDTH_MM, DEFAULT_HEIGHT_MM, DEFAULT_DEPTH_MM)
    }

    /// Top and bottom panel.
    pub fn top_panel(&self) -> PanelSize {
        PanelSize::new(self.width, self.depth)
    }

    /// Left and right side panel.
    pub fn side_panel(&self) -> PanelSize {
        PanelSize::new(self.depth, self.height)
    }

    /// Back panel.
    pub fn back_panel(&self) -> PanelSize {
        PanelSize::new(self.width, self.height)
    }
}

/// A flat rectangular panel in mm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl PanelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
