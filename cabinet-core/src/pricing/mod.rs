//! Pricing engine: panel areas, material, hinge, and accessory costs, and
//! their composition into cabinet and project totals.
//!
//! Everything here is a pure function of its inputs and never fails; missing
//! data contributes zero.

mod accessory;
mod area;
mod cabinet;
mod hinge;
mod material;
mod project;

pub use accessory::{accessory_cost, Priced};
pub use area::area_of;
pub use cabinet::{
    box_material_cost, compose_cabinet_cost, compose_preset_cost, CabinetCost, UnresolvedMaterial,
};
pub use hinge::{hinge_cost, HingeCost};
pub use material::{cabinet_piece_costs, piece_cost};
pub use project::{
    cabinet_accessory_cost, cabinet_material_cost, project_accessory_total,
    project_material_total, project_total, PriceBreakdown,
};
