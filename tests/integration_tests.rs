//! Integration tests for outdates
//!
//! These tests verify:
//! - Manifest loading from a project directory
//! - Registry lookups against a mock npm registry
//! - Range checks for the scenarios the report must flag

use outdates::check::OutdatedChecker;
use outdates::domain::{CheckStatus, DependencyDeclaration, DependencyGroup};
use outdates::error::{ManifestError, RegistryError};
use outdates::manifest::{load_manifest, manifest_path};
use outdates::orchestrator::Orchestrator;
use outdates::output::TextFormatter;
use outdates::registry::{HttpClient, NpmRegistry, Registry};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn npm_registry(server: &MockServer) -> NpmRegistry {
    NpmRegistry::new(HttpClient::new().unwrap(), server.uri())
}

async fn mount_latest(server: &MockServer, package: &str, latest: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", package)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": package, "dist-tags": {"latest": latest}})),
        )
        .mount(server)
        .await;
}

mod manifest_loading {
    use super::*;

    #[test]
    fn test_load_both_groups_in_order() {
        let temp_dir = create_test_dir();
        let package_json = r#"{
            "name": "test-project",
            "version": "1.0.0",
            "dependencies": {
                "urllib": "^2.0.0",
                "co": "^4.6.0",
                "commander": "^2.9.0"
            },
            "devDependencies": {
                "mocha": "*",
                "eslint": "~3.0.0"
            },
            "publishConfig": {
                "registry": "https://registry.npmmirror.com"
            }
        }"#;
        fs::write(temp_dir.path().join("package.json"), package_json).unwrap();

        let manifest = load_manifest(&manifest_path(temp_dir.path())).unwrap();

        let runtime: Vec<&str> = manifest
            .group(DependencyGroup::Runtime)
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(runtime, vec!["urllib", "co", "commander"]);

        let dev: Vec<&str> = manifest
            .group(DependencyGroup::Development)
            .iter()
            .map(|d| d.range.as_str())
            .collect();
        assert_eq!(dev, vec!["*", "~3.0.0"]);

        assert_eq!(
            manifest.publish_registry.as_deref(),
            Some("https://registry.npmmirror.com")
        );
    }

    #[test]
    fn test_load_missing_manifest() {
        let temp_dir = create_test_dir();
        let result = load_manifest(&manifest_path(temp_dir.path()));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_load_manifest_without_dependencies() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("package.json"), r#"{"name": "empty"}"#).unwrap();

        let manifest = load_manifest(&manifest_path(temp_dir.path())).unwrap();
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
        assert!(manifest.publish_registry.is_none());
    }
}

mod registry_lookup {
    use super::*;

    #[tokio::test]
    async fn test_latest_version_from_dist_tags() {
        let server = MockServer::start().await;
        mount_latest(&server, "foo", "1.2.0").await;

        let latest = npm_registry(&server).latest_version("foo").await.unwrap();
        assert_eq!(latest.as_deref(), Some("1.2.0"));
    }

    #[tokio::test]
    async fn test_missing_dist_tags_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "foo"})))
            .mount(&server)
            .await;

        let latest = npm_registry(&server).latest_version("foo").await.unwrap();
        assert!(latest.is_none());
    }

    #[tokio::test]
    async fn test_not_found_json_body_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing-pkg"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
            .mount(&server)
            .await;

        let latest = npm_registry(&server)
            .latest_version("missing-pkg")
            .await
            .unwrap();
        assert!(latest.is_none());
    }

    #[tokio::test]
    async fn test_non_json_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foo"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = npm_registry(&server)
            .latest_version("foo")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_each_lookup_hits_the_registry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foo"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"dist-tags": {"latest": "1.0.0"}})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let registry = npm_registry(&server);
        registry.latest_version("foo").await.unwrap();
        registry.latest_version("foo").await.unwrap();
    }
}

mod outdated_scenarios {
    use super::*;

    #[tokio::test]
    async fn test_caret_range_scenarios() {
        let server = MockServer::start().await;
        mount_latest(&server, "current", "1.2.0").await;
        mount_latest(&server, "behind", "2.0.0").await;

        let registry = npm_registry(&server);
        let checker = OutdatedChecker::new();

        let dep = DependencyDeclaration::new("current", "^1.0.0");
        let latest = registry.latest_version(&dep.name).await.unwrap();
        assert_eq!(checker.judge(&dep, latest).status, CheckStatus::Current);

        let dep = DependencyDeclaration::new("behind", "^1.0.0");
        let latest = registry.latest_version(&dep.name).await.unwrap();
        assert_eq!(checker.judge(&dep, latest).status, CheckStatus::Outdated);
    }

    #[tokio::test]
    async fn test_orchestrator_against_mock_registry() {
        let server = MockServer::start().await;
        mount_latest(&server, "foo", "1.2.0").await;
        mount_latest(&server, "bar", "5.0.0").await;

        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{"dependencies": {"foo": "^1.0.0"}, "devDependencies": {"bar": ">=4 <5"}}"#,
        )
        .unwrap();
        let manifest = load_manifest(&manifest_path(temp_dir.path())).unwrap();

        let orchestrator = Orchestrator::new(npm_registry(&server), TextFormatter::with_color(false));
        let mut out = Vec::new();
        let reports = orchestrator.run(&manifest, &mut out).await.unwrap();

        assert_eq!(reports[0].results.len(), 1);
        assert_eq!(reports[0].results[0].status, CheckStatus::Current);
        assert_eq!(reports[1].results.len(), 1);
        assert_eq!(reports[1].results[0].status, CheckStatus::Outdated);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(&server.uri()));
        assert!(out.contains("5.0.0"));
    }
}
