//! Run configuration
//!
//! Built once from the command line and passed to the run routine.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::manifest::{manifest_path, PackageManifest};
use crate::registry::DEFAULT_REGISTRY_URL;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the registry URL in use came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrySource {
    /// `--registry` flag
    CommandLine,
    /// `publishConfig.registry` in package.json
    Manifest,
    /// Built-in default
    Default,
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrySource::CommandLine => write!(f, "--registry"),
            RegistrySource::Manifest => write!(f, "publishConfig.registry"),
            RegistrySource::Default => write!(f, "default"),
        }
    }
}

/// Registry URL chosen for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegistry {
    /// Base URL
    pub url: String,
    /// Origin of the URL
    pub source: RegistrySource,
}

/// Immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Absolute path of the package.json to read
    pub manifest_path: PathBuf,
    /// Registry given on the command line
    pub registry_override: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Whether to color the report
    pub color: bool,
    /// Whether to log diagnostics to stderr
    pub verbose: bool,
}

impl RunConfig {
    /// Build the configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let registry_override = match &args.registry {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::InvalidRegistryUrl { value: url.clone() });
            }
            Some(url) => Some(url.trim().to_string()),
            None => None,
        };

        Ok(Self {
            manifest_path: manifest_path(&resolve_dir(&args.path)?),
            registry_override,
            timeout: args.timeout,
            color: !args.no_color,
            verbose: args.verbose,
        })
    }

    /// Pick the registry: command line, then the manifest, then the default
    pub fn registry_for(&self, manifest: &PackageManifest) -> ResolvedRegistry {
        if let Some(url) = &self.registry_override {
            return ResolvedRegistry {
                url: url.clone(),
                source: RegistrySource::CommandLine,
            };
        }

        if let Some(url) = &manifest.publish_registry {
            return ResolvedRegistry {
                url: url.clone(),
                source: RegistrySource::Manifest,
            };
        }

        ResolvedRegistry {
            url: DEFAULT_REGISTRY_URL.to_string(),
            source: RegistrySource::Default,
        }
    }
}

/// Resolve the target directory against the current directory
fn resolve_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|e| ConfigError::InvalidPath {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
