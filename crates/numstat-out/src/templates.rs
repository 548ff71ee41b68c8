//! Report templates file.
//!
//! YAML with named handlebars templates:
//!
//! ```yaml
//! version: "1.0"
//! templates:
//!   statistics:
//!     description: Descriptive statistics summary
//!     template: "Count: {{count}}"
//! ```

use numstat_core::NumstatError;
use serde::Deserialize;
use std::collections::HashMap;

/// Templates shipped with the crate
pub const DEFAULT_TEMPLATES: &str = include_str!("../templates/reports.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, NumstatError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| NumstatError::Render(format!("bad templates file: {}", e)))
    }

    pub fn builtin() -> Result<Self, NumstatError> {
        Self::from_yaml(DEFAULT_TEMPLATES)
    }

    /// All template names, sorted
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
