//! cabinet-core - Pricing engine and cabinet normalization for furniture quotes.
//!
//! This library prices cabinets (furniture units) assembled from catalog
//! materials and accessories, and aggregates them into project quotes with
//! labor, transport, markup, and VAT.
//!
//! # Example
//!
//! ```
//! use cabinet_core::{compose_cabinet_cost, Cabinet, Dimensions, MaterialItem};
//!
//! let cabinet = Cabinet::with_dimensions("Base 900", Dimensions::new(900.0, 720.0, 560.0));
//! let pal = MaterialItem::new("pal", "PAL 18mm", 100.0);
//! let cost = compose_cabinet_cost(&cabinet, &[], Some(&pal), 15.0);
//! assert!((cost.total - 276.24).abs() < 1e-6);
//! ```

pub mod config;
pub mod error;
pub mod identity;
mod lenient;
pub mod model;
pub mod normalize;
pub mod pricing;
pub mod quote;
pub mod store;

// Re-exports for convenience
pub use config::{CostOptions, PricingSettings};
pub use error::{QuoteError, Result};
pub use model::{
    AccessoryItem, AccessoryLine, Cabinet, Dimensions, MaterialItem, MaterialLine, PanelSize,
    Piece, Project, ProjectStatus,
};
pub use normalize::{normalize, normalize_value, PartialCabinet};
pub use pricing::{
    accessory_cost, area_of, cabinet_piece_costs, compose_cabinet_cost, hinge_cost, piece_cost,
    project_accessory_total, project_material_total, project_total, CabinetCost, HingeCost,
    PriceBreakdown, UnresolvedMaterial,
};
pub use quote::{quote_cabinet, quote_project, quote_project_file, CabinetQuote, ProjectQuote};
pub use store::{Catalog, CatalogSource};
