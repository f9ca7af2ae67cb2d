//! Registry adapters for fetching the latest published version
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm registry adapter reading `dist-tags.latest`

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::{NpmRegistry, DEFAULT_REGISTRY_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registries that can report a package's latest version
#[async_trait]
pub trait Registry: Send + Sync {
    /// Base URL lookups are made against
    fn base_url(&self) -> &str;

    /// Fetch the latest published version of a package
    ///
    /// `Ok(None)` means the registry answered but named no latest version.
    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError>;
}
