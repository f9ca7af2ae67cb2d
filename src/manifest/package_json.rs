//! package.json parser
//!
//! Handles:
//! - dependencies
//! - devDependencies
//! - publishConfig.registry

use crate::domain::{DependencyDeclaration, DependencyGroup};
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::Path;

/// Parsed view of a package.json file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    /// Runtime dependencies in declaration order
    pub dependencies: Vec<DependencyDeclaration>,
    /// Development dependencies in declaration order
    pub dev_dependencies: Vec<DependencyDeclaration>,
    /// `publishConfig.registry`, if set to a non-empty string
    pub publish_registry: Option<String>,
}

impl PackageManifest {
    /// Parse package.json content; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        let dependencies = json
            .get(DependencyGroup::Runtime.manifest_key())
            .and_then(|v| v.as_object())
            .map(parse_dependency_object)
            .unwrap_or_default();

        let dev_dependencies = json
            .get(DependencyGroup::Development.manifest_key())
            .and_then(|v| v.as_object())
            .map(parse_dependency_object)
            .unwrap_or_default();

        let publish_registry = json
            .get("publishConfig")
            .and_then(|v| v.get("registry"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(Self {
            dependencies,
            dev_dependencies,
            publish_registry,
        })
    }

    /// Declarations of one group
    pub fn group(&self, group: DependencyGroup) -> &[DependencyDeclaration] {
        match group {
            DependencyGroup::Runtime => &self.dependencies,
            DependencyGroup::Development => &self.dev_dependencies,
        }
    }
}

fn parse_dependency_object(deps: &Map<String, Value>) -> Vec<DependencyDeclaration> {
    deps.iter()
        .map(|(name, value)| {
            // Non-string ranges still get a row, shown as their JSON text
            let range = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            DependencyDeclaration::new(name.clone(), range)
        })
        .collect()
}
