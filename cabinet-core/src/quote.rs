//! Quoting pipeline: price every cabinet of a project against a catalog and
//! produce the project breakdown.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::CostOptions;
use crate::error::Result;
use crate::model::{Cabinet, Project};
use crate::pricing::{
    compose_cabinet_cost, compose_preset_cost, project_accessory_total, project_material_total,
    project_total, CabinetCost, PriceBreakdown, UnresolvedMaterial,
};
use crate::store::{Catalog, CatalogSource};

/// Cost of one cabinet within a project quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetQuote {
    pub cabinet_id: String,
    pub name: String,
    /// Operator-set sale price, reported alongside the computed cost.
    pub price: f64,
    pub cost: CabinetCost,
}

/// Full quote for a project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuote {
    pub project_id: String,
    pub currency: String,
    pub cabinets: Vec<CabinetQuote>,
    pub breakdown: PriceBreakdown,
    /// Every catalog reference that could not be resolved.
    pub unresolved: Vec<UnresolvedMaterial>,
}

/// Price one cabinet.
///
/// A cabinet listing materials is priced against the catalog. A preset
/// cabinet carrying only pieces is priced from its pieces. Anything else is
/// priced as a box of the fallback material named in `options`.
pub fn quote_cabinet(
    cabinet: &Cabinet,
    catalog: &impl CatalogSource,
    options: &CostOptions,
) -> CabinetCost {
    if cabinet.materials.is_empty() && !cabinet.pieces.is_empty() {
        return compose_preset_cost(cabinet, options.hinge_price());
    }

    let fallback_id = options.fallback_material.as_deref();
    let fallback = fallback_id.and_then(|id| catalog.find_material(id));
    let mut cost = compose_cabinet_cost(
        cabinet,
        catalog.materials(),
        fallback,
        options.hinge_price(),
    );

    if cabinet.materials.is_empty() {
        if let (Some(id), None) = (fallback_id, fallback) {
            let missing = UnresolvedMaterial {
                cabinet_id: cabinet.id.clone(),
                material_id: id.to_string(),
            };
            warn!("{}", missing);
            cost.unresolved.push(missing);
        }
    }

    cost
}

/// Price every cabinet of `project`, record each cost on its cabinet, and
/// re-derive the project total.
pub fn quote_project(
    project: &mut Project,
    catalog: &impl CatalogSource,
    options: &CostOptions,
) -> ProjectQuote {
    let mut cabinets = Vec::with_capacity(project.cabinets.len());
    let mut unresolved = Vec::new();

    for cabinet in &mut project.cabinets {
        let cost = quote_cabinet(cabinet, catalog, options);
        cabinet.apply_cost(&cost);
        unresolved.extend(cost.unresolved.iter().cloned());
        cabinets.push(CabinetQuote {
            cabinet_id: cabinet.id.clone(),
            name: cabinet.name.clone(),
            price: cabinet.price,
            cost,
        });
    }

    let settings = catalog.settings();
    let breakdown = project_total(
        project_material_total(&project.cabinets),
        project_accessory_total(&project.cabinets),
        settings,
        options.include_tva(),
    );
    project.total = breakdown.total;

    info!(
        "Quoted project {}: {} cabinet(s), total {:.2} {}",
        project.id,
        cabinets.len(),
        breakdown.total,
        settings.currency
    );

    ProjectQuote {
        project_id: project.id.clone(),
        currency: settings.currency.clone(),
        cabinets,
        breakdown,
        unresolved,
    }
}

/// Load a project and a catalog from JSON files and quote the project.
///
/// Returns the project with recomputed costs together with its quote.
pub fn quote_project_file(
    project_path: &Path,
    catalog_path: &Path,
    options: &CostOptions,
) -> Result<(Project, ProjectQuote)> {
    let catalog = Catalog::from_path(catalog_path)?;
    let mut project = Project::from_path(project_path)?;
    let quote = quote_project(&mut project, &catalog, options);
    Ok((project, quote))
}
