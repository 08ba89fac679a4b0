//! Catalog and project storage backed by JSON files.
//!
//! The pricing engine never reads storage itself. Callers take a snapshot
//! through [`CatalogSource`] and pass it in.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PricingSettings;
use crate::error::{QuoteError, Result};
use crate::model::{AccessoryItem, MaterialItem, Project};

/// Read-only view of catalog reference data and pricing settings.
pub trait CatalogSource {
    /// All materials.
    fn materials(&self) -> &[MaterialItem];

    /// All accessories.
    fn accessories(&self) -> &[AccessoryItem];

    /// Current pricing settings.
    fn settings(&self) -> &PricingSettings;

    /// Find a material by id.
    fn find_material(&self, id: &str) -> Option<&MaterialItem> {
        self.materials().iter().find(|m| m.id == id)
    }

    /// Find an accessory by id.
    fn find_accessory(&self, id: &str) -> Option<&AccessoryItem> {
        self.accessories().iter().find(|a| a.id == id)
    }
}

/// An in-memory catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub materials: Vec<MaterialItem>,
    pub accessories: Vec<AccessoryItem>,
    pub settings: PricingSettings,
}

impl Catalog {
    /// Create a catalog snapshot.
    pub fn new(
        materials: Vec<MaterialItem>,
        accessories: Vec<AccessoryItem>,
        settings: PricingSettings,
    ) -> Self {
        Self {
            materials,
            accessories,
            settings,
        }
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let catalog: Catalog = read_json(path)?;
        debug!(
            "Loaded catalog: {} materials, {} accessories",
            catalog.materials.len(),
            catalog.accessories.len()
        );
        Ok(catalog)
    }

    /// Write the catalog to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }
}

impl CatalogSource for Catalog {
    fn materials(&self) -> &[MaterialItem] {
        &self.materials
    }

    fn accessories(&self) -> &[AccessoryItem] {
        &self.accessories
    }

    fn settings(&self) -> &PricingSettings {
        &self.settings
    }
}

impl Project {
    /// Load a project from a JSON file. Cabinets are normalized as they load.
    pub fn from_path(path: &Path) -> Result<Self> {
        let project: Project = read_json(path)?;
        debug!(
            "Loaded project {} with {} cabinet(s)",
            project.id,
            project.cabinets.len()
        );
        Ok(project)
    }

    /// Write the project to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    serde_json::from_str(&content).map_err(|source| QuoteError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON and write it to a file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(QuoteError::Serialize)?;
    std::fs::write(path, json)?;
    Ok(())
}
