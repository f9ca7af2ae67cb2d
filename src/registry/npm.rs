//! npm registry adapter
//!
//! Reads the `latest` dist-tag from a package document.
//! API endpoint: {registry}/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, Registry};
use async_trait::async_trait;
use serde_json::Value;

/// Registry used when neither the command line nor the manifest names one
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm registry adapter
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

impl NpmRegistry {
    /// Create an adapter for the given registry base URL
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the URL for a package
    ///
    /// The name is appended verbatim; scoped names are not encoded.
    pub fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }
}

/// Extract `dist-tags.latest` from a package document
fn extract_latest(document: &Value) -> Option<String> {
    document
        .get("dist-tags")?
        .get("latest")?
        .as_str()
        .map(String::from)
}

#[async_trait]
impl Registry for NpmRegistry {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError> {
        let url = self.build_url(package);
        let document = self.client.get_json(&url, package).await?;
        Ok(extract_latest(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn adapter(base_url: &str) -> NpmRegistry {
        NpmRegistry::new(HttpClient::new().unwrap(), base_url)
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            adapter(DEFAULT_REGISTRY_URL).build_url("lodash"),
            "https://registry.npmjs.org/lodash"
        );
    }

    #[test]
    fn test_build_url_scoped_package() {
        assert_eq!(
            adapter(DEFAULT_REGISTRY_URL).build_url("@types/node"),
            "https://registry.npmjs.org/@types/node"
        );
    }

    #[test]
    fn test_build_url_keeps_base_verbatim() {
        assert_eq!(
            adapter("http://localhost:4873/").build_url("foo"),
            "http://localhost:4873//foo"
        );
    }

    #[test]
    fn test_extract_latest() {
        let doc = json!({"name": "foo", "dist-tags": {"latest": "1.2.0", "next": "2.0.0-rc.1"}});
        assert_eq!(extract_latest(&doc), Some("1.2.0".to_string()));
    }

    #[test]
    fn test_extract_latest_missing_dist_tags() {
        let doc = json!({"error": "Not found"});
        assert_eq!(extract_latest(&doc), None);
    }

    #[test]
    fn test_extract_latest_missing_tag() {
        let doc = json!({"dist-tags": {"beta": "1.0.0-beta.1"}});
        assert_eq!(extract_latest(&doc), None);
    }

    #[test]
    fn test_extract_latest_non_string() {
        let doc = json!({"dist-tags": {"latest": 3}});
        assert_eq!(extract_latest(&doc), None);
    }

    #[test]
    fn test_base_url() {
        assert_eq!(adapter("http://localhost:4873").base_url(), "http://localhost:4873");
    }
}
