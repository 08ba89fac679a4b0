//! Pricing constants and runtime settings.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Millimeters per meter, used to turn panel sizes into square meters.
pub const MM_PER_M: f64 = 1000.0;

/// Hinges fitted to any cabinet up to one hinge span wide.
pub const BASE_HINGE_COUNT: u32 = 2;

/// Every additional full span of width adds one hinge.
pub const HINGE_SPAN_MM: f64 = 600.0;

/// Default unit price of a hinge.
pub const DEFAULT_HINGE_PRICE: f64 = 15.0;

/// Default cabinet width in mm.
pub const DEFAULT_WIDTH_MM: f64 = 600.0;

/// Default cabinet height in mm.
pub const DEFAULT_HEIGHT_MM: f64 = 720.0;

/// Default cabinet depth in mm.
pub const DEFAULT_DEPTH_MM: f64 = 560.0;

/// Name given to a cabinet created from nothing.
pub const DEFAULT_CABINET_NAME: &str = "New cabinet";

/// Default VAT percentage.
pub const DEFAULT_TVA: f64 = 19.0;

/// Default currency label.
pub const DEFAULT_CURRENCY: &str = "RON";

/// Process-wide pricing percentages.
///
/// All percentages are whole numbers: `19.0` means 19%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    /// VAT percentage.
    pub tva: f64,
    /// Labor percentage.
    pub manopera: f64,
    /// Transport percentage.
    pub transport: f64,
    /// Commercial markup percentage.
    pub adaos: f64,
    /// Currency label shown next to prices.
    pub currency: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            tva: DEFAULT_TVA,
            manopera: 0.0,
            transport: 0.0,
            adaos: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PricingSettings {
    /// Create settings with the given percentages and the default currency.
    pub fn new(tva: f64, manopera: f64, transport: f64, adaos: f64) -> Self {
        Self {
            tva,
            manopera,
            transport,
            adaos,
            ..Default::default()
        }
    }
}

/// Options for composing a single cabinet's cost.
#[derive(Debug, Clone, Default)]
pub struct CostOptions {
    /// Hinge unit price; `None` uses [`DEFAULT_HINGE_PRICE`].
    pub hinge_price: Option<f64>,
    /// Material used for the six-panel estimate when a cabinet lists none.
    pub fallback_material: Option<String>,
    /// Leave VAT out of project totals.
    pub exclude_tva: bool,
}

impl CostOptions {
    /// Effective hinge unit price.
    pub fn hinge_price(&self) -> f64 {
        self.hinge_price.unwrap_or(DEFAULT_HINGE_PRICE)
    }

    /// Whether VAT is applied to project totals.
    pub fn include_tva(&self) -> bool {
        !self.exclude_tva
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PricingSettings::default();
        assert_eq!(settings.tva, 19.0);
        assert_eq!(settings.manopera, 0.0);
        assert_eq!(settings.currency, "RON");
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let settings: PricingSettings = serde_json::from_str(r#"{"adaos": 10}"#).unwrap();
        assert_eq!(settings.adaos, 10.0);
        assert_eq!(settings.tva, DEFAULT_TVA);
        assert_eq!(settings.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_cost_options_defaults() {
        let options = CostOptions::default();
        assert_eq!(options.hinge_price(), DEFAULT_HINGE_PRICE);
        assert!(options.include_tva());
    }

    #[test]
    fn test_approx_helpers() {
        assert!(float_cmp::approx_eq(0.1 + 0.2, 0.3));
        assert!(float_cmp::approx_zero(0.00001));
        assert!(!float_cmp::approx_zero(0.01));
    }
}
