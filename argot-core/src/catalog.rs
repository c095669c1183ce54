//! Action catalog loading and lookup.
//!
//! An action definition is a JSON document describing an automation
//! action's name, description and parameter specification. A catalog is a
//! directory of such documents, looked up by action name. Upstream this
//! metadata comes from the automation service's action listing; here it is
//! treated as opaque, already-validated input.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArgotError, Result};
use crate::spec::ParameterSpec;

/// A single automation action: its name and declared parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Action name, used for catalog lookup
    pub name: String,

    /// Description of what the action does
    #[serde(default)]
    pub description: String,

    /// Ordered parameter specification
    #[serde(default)]
    pub parameters: ParameterSpec,
}

impl ActionDefinition {
    /// Load a single action definition from a JSON file.
    pub fn from_file(path: &Path) -> Result<ActionDefinition> {
        let content = fs::read_to_string(path).map_err(|e| {
            ArgotError::CatalogError(format!(
                "Failed to read action file {}: {}",
                path.display(),
                e
            ))
        })?;

        let action: ActionDefinition = serde_json::from_str(&content)?;

        Ok(action)
    }
}

/// An in-memory collection of action definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    actions: Vec<ActionDefinition>,
}

impl Catalog {
    /// Build a catalog from already-loaded definitions.
    pub fn new(actions: Vec<ActionDefinition>) -> Self {
        Self { actions }
    }

    /// Load every `*.json` action definition in a directory.
    pub fn load(dir: &Path) -> Result<Catalog> {
        let entries = fs::read_dir(dir).map_err(|e| {
            ArgotError::CatalogError(format!(
                "Failed to read catalog directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let mut actions = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| ArgotError::CatalogError(format!("Failed to read catalog entry: {}", e)))?
                .path();

            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                actions.push(ActionDefinition::from_file(&path)?);
            }
        }

        // Directory iteration order is platform-dependent
        actions.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Catalog { actions })
    }

    /// The default catalog location: `$ARGOT_CATALOG_DIR`, falling back to
    /// `$HOME/.argot/actions`.
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("ARGOT_CATALOG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let home = std::env::var("HOME")
            .map_err(|_| ArgotError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".argot").join("actions"))
    }

    /// Find an action by name.
    pub fn find(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// All actions, sorted by name.
    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }
}
