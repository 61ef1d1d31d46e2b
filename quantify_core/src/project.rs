//! # Project Data Structures
//!
//! The `Project` struct is the root container for a job's saved estimations.
//! It is a plain serializable shape: where and how it is stored (local file,
//! document database, sync service) is the caller's concern, and the engine
//! never holds onto a project beyond a single call.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, name, client, address, timestamps)
//! └── items: Vec<SavedItem> (committed estimations, in report order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quantify_core::project::Project;
//!
//! let mut project = Project::new("Green Villa");
//! project.meta.client = Some("R. Ahmed".to_string());
//!
//! let json = project.to_json().unwrap();
//! let roundtrip = Project::from_json(&json).unwrap();
//! assert_eq!(roundtrip.meta.name, "Green Villa");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::estimates::{self, ElementType, EstimationResult};
use crate::inputs::InputMap;

/// Current schema version for serialized projects
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One committed estimation: the inputs used and the result they produced.
///
/// Saved items are immutable records. Re-estimating an element replaces the
/// whole item rather than patching fields, so inputs and result can never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    /// Stable identity within the project
    pub id: Uuid,
    /// Display name (e.g. "C-3", "Ground Floor Slab")
    pub name: String,
    /// Which element formula produced the result
    pub element: ElementType,
    /// The raw inputs as entered
    pub inputs: InputMap,
    /// The computed breakdown
    pub result: EstimationResult,
    /// When the item was created or last replaced
    pub timestamp: DateTime<Utc>,
}

impl SavedItem {
    /// Create a new saved item with a fresh id and the current time.
    pub fn new(
        name: impl Into<String>,
        element: ElementType,
        inputs: InputMap,
        result: EstimationResult,
    ) -> Self {
        SavedItem {
            id: Uuid::new_v4(),
            name: name.into(),
            element,
            inputs,
            result,
            timestamp: Utc::now(),
        }
    }
}

/// Project metadata stored alongside the items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Project name
    pub name: String,

    /// Client name, if recorded
    pub client: Option<String>,

    /// Site address, if recorded
    pub address: Option<String>,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Root container for one job's estimations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata
    pub meta: ProjectMetadata,

    /// Committed estimations in report order
    pub items: Vec<SavedItem>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                name: name.into(),
                client: None,
                address: None,
                created: now,
                modified: now,
            },
            items: Vec::new(),
        }
    }

    /// Append a saved item. Returns the id it carries.
    pub fn add_item(&mut self, item: SavedItem) -> Uuid {
        let id = item.id;
        self.items.push(item);
        self.touch();
        id
    }

    /// Replace an existing item wholesale, keeping its id.
    ///
    /// Returns false (and stores nothing) when no item has that id.
    pub fn replace_item(&mut self, id: Uuid, mut item: SavedItem) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                item.id = id;
                *slot = item;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Remove an item by id, returning it if it existed.
    pub fn remove_item(&mut self, id: Uuid) -> Option<SavedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(index);
        self.touch();
        Some(item)
    }

    /// Get an item by id.
    pub fn get_item(&self, id: Uuid) -> Option<&SavedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of saved items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Summary totals across every saved item.
    pub fn grand_total(&self) -> EstimationResult {
        estimates::grand_total(&self.items)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::serialization(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use crate::estimates::calculate;
    use crate::inputs::FieldValue;

    fn slab_item() -> SavedItem {
        let mut inputs = InputMap::new();
        inputs.insert("area".into(), FieldValue::Number(1200.0));
        inputs.insert("thickness".into(), FieldValue::Number(5.0));
        inputs.insert("mix_ratio".into(), FieldValue::from("1:2:4 (M15)"));
        inputs.insert("rod_dia".into(), FieldValue::from("10"));
        let result = calculate(ElementType::Slab, &inputs, &GlobalConfig::default());
        SavedItem::new("S-1", ElementType::Slab, inputs, result)
    }

    #[test]
    fn test_add_get_remove() {
        let mut project = Project::new("Test House");
        let id = project.add_item(slab_item());
        assert_eq!(project.item_count(), 1);
        assert_eq!(project.get_item(id).unwrap().name, "S-1");

        let removed = project.remove_item(id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.get_item(id).is_none());
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut project = Project::new("Test House");
        let id = project.add_item(slab_item());

        let mut replacement = slab_item();
        replacement.name = "S-1 revised".to_string();
        assert!(project.replace_item(id, replacement));

        let stored = project.get_item(id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "S-1 revised");

        assert!(!project.replace_item(Uuid::new_v4(), slab_item()));
        assert_eq!(project.item_count(), 1);
    }

    #[test]
    fn test_grand_total_over_items() {
        let mut project = Project::new("Test House");
        project.add_item(slab_item());
        project.add_item(slab_item());
        let total = project.grand_total();
        assert_eq!(total.details, vec!["Total Items: 2".to_string()]);
        assert!(total.cement_bags > 0.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut project = Project::new("Serialized House");
        project.meta.client = Some("Client Co".to_string());
        project.add_item(slab_item());

        let json = project.to_json().unwrap();
        assert!(json.contains("Serialized House"));
        assert!(json.contains("\"SLAB\""));

        let roundtrip = Project::from_json(&json).unwrap();
        assert_eq!(roundtrip, project);
    }

    #[test]
    fn test_from_json_error_is_structured() {
        let err = Project::from_json("{not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_schema_version_recorded() {
        let project = Project::new("Versioned");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }
}
