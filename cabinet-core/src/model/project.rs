//! A named collection of cabinets quoted for one client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cabinet;
use crate::config::PricingSettings;
use crate::identity::generate_id;
use crate::lenient;
use crate::pricing::{project_accessory_total, project_material_total, project_total};

/// Where a project stands commercially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Draft => write!(f, "draft"),
            ProjectStatus::InProgress => write!(f, "in progress"),
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A client project.
///
/// `total` is whatever was last stored; callers re-derive it with
/// [`Project::refresh_total`] rather than trusting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient::cabinets")]
    pub cabinets: Vec<Cabinet>,
}

impl Project {
    /// Create an empty draft project dated today.
    pub fn new(name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            client: client.into(),
            date: Some(chrono::Local::now().date_naive()),
            status: ProjectStatus::Draft,
            total: 0.0,
            cabinets: Vec::new(),
        }
    }

    /// Find a cabinet by id.
    pub fn find_cabinet(&self, id: &str) -> Option<&Cabinet> {
        self.cabinets.iter().find(|c| c.id == id)
    }

    /// Remove a whole cabinet record. Returns whether anything was removed.
    pub fn remove_cabinet(&mut self, id: &str) -> bool {
        let before = self.cabinets.len();
        self.cabinets.retain(|c| c.id != id);
        self.cabinets.len() != before
    }

    /// Recompute `total` from the cabinets and return it.
    pub fn refresh_total(&mut self, settings: &PricingSettings, include_tva: bool) -> f64 {
        let breakdown = project_total(
            project_material_total(&self.cabinets),
            project_accessory_total(&self.cabinets),
            settings,
            include_tva,
        );
        self.total = breakdown.total;
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::Dimensions;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);
    }

    #[test]
    fn test_refresh_total_ignores_stored_value() {
        let mut project = Project::new("Kitchen", "Popescu");
        project.total = 123456.0;
        let mut cabinet = Cabinet::new();
        cabinet.material_cost = Some(1000.0);
        cabinet.accessory_cost = Some(0.0);
        project.cabinets.push(cabinet);

        let settings = PricingSettings::new(19.0, 15.0, 5.0, 10.0);
        let total = project.refresh_total(&settings, true);
        assert!(approx_eq(total, 1547.0));
        assert!(approx_eq(project.total, 1547.0));
    }

    #[test]
    fn test_remove_cabinet() {
        let mut project = Project::new("Kitchen", "Popescu");
        let cabinet = Cabinet::new();
        let id = cabinet.id.clone();
        project.cabinets.push(cabinet);
        assert!(project.find_cabinet(&id).is_some());
        assert!(project.remove_cabinet(&id));
        assert!(project.cabinets.is_empty());
    }

    #[test]
    fn test_project_json_normalizes_cabinets() {
        let json = r#"{
            "id": "p1",
            "name": "Bathroom",
            "date": "2026-03-01",
            "cabinets": [{"id": "c1", "dimensions": {"width": 400, "height": 700, "depth": 300}}]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::Draft);
        assert_eq!(project.cabinets[0].width(), 400.0);
        assert!(project.cabinets[0].accessories.is_empty());
    }

    #[test]
    fn test_project_json_repairs_unreadable_cabinets() {
        let json = r#"{
            "id": "p2",
            "total": "12.5",
            "cabinets": [{"id": "c1", "width": 600}, null, "drawer"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.total, 12.5);
        assert_eq!(project.cabinets.len(), 3);
        assert_eq!(project.cabinets[0].id, "c1");
        assert_eq!(project.cabinets[0].width(), 600.0);
        assert_eq!(project.cabinets[1].dimensions(), Dimensions::standard());
        assert_eq!(project.cabinets[2].dimensions(), Dimensions::standard());
        assert_ne!(project.cabinets[1].id, project.cabinets[2].id);
    }

    #[test]
    fn test_project_json_non_array_cabinets_is_empty() {
        let project: Project =
            serde_json::from_str(r#"{"id": "p3", "total": {"x": 1}, "cabinets": "none"}"#).unwrap();
        assert_eq!(project.total, 0.0);
        assert!(project.cabinets.is_empty());
    }
}
