//! Manifest file loading
//!
//! This module provides functionality to:
//! - Locate package.json in a target directory
//! - Read the declared runtime and development dependencies
//! - Read the publish registry configured for the package

mod package_json;

pub use package_json::PackageManifest;

use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Manifest filename looked up in the target directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// Path of the manifest inside a target directory
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILENAME)
}

/// Load package.json from a file path
pub fn load_manifest(path: &Path) -> Result<PackageManifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

    PackageManifest::parse(&content, path)
}
