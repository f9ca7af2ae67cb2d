//! Run orchestrator for the outdated report
//!
//! This module provides:
//! - Workflow coordination: load → resolve → check → print
//! - Strictly sequential registry lookups in manifest order
//! - Row-by-row streaming so a failure leaves no rows after it
//! - Abort on the first registry failure

use crate::check::OutdatedChecker;
use crate::config::RunConfig;
use crate::domain::{CheckResult, DependencyGroup};
use crate::error::{AppError, ManifestError};
use crate::manifest::{load_manifest, PackageManifest};
use crate::output::TextFormatter;
use crate::registry::{HttpClient, NpmRegistry, Registry};
use std::io::Write;

/// Results of one dependency group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    /// The group
    pub group: DependencyGroup,
    /// One result per declaration, in manifest order
    pub results: Vec<CheckResult>,
}

impl GroupReport {
    /// Number of outdated results in this group
    pub fn outdated_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_outdated()).count()
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The manifest did not exist; nothing was looked up
    ManifestNotFound,
    /// The full report was printed
    Completed(Vec<GroupReport>),
}

/// Orchestrator for checking every declared dependency
pub struct Orchestrator<R: Registry> {
    /// Registry lookups are made against
    registry: R,
    /// Range checker
    checker: OutdatedChecker,
    /// Report formatter
    formatter: TextFormatter,
    /// Whether to log diagnostics to stderr
    verbose: bool,
}

impl<R: Registry> Orchestrator<R> {
    /// Create an orchestrator for a registry
    pub fn new(registry: R, formatter: TextFormatter) -> Self {
        Self {
            registry,
            checker: OutdatedChecker::new(),
            formatter,
            verbose: false,
        }
    }

    /// Enable verbose diagnostics
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Print the report for a manifest, one group after another
    pub async fn run(
        &self,
        manifest: &PackageManifest,
        writer: &mut dyn Write,
    ) -> Result<Vec<GroupReport>, AppError> {
        self.formatter.write_registry(self.registry.base_url(), writer)?;

        let mut reports = Vec::with_capacity(DependencyGroup::all().len());
        for group in DependencyGroup::all() {
            reports.push(self.check_group(*group, manifest, writer).await?);
        }

        Ok(reports)
    }

    /// Check and print one group
    async fn check_group(
        &self,
        group: DependencyGroup,
        manifest: &PackageManifest,
        writer: &mut dyn Write,
    ) -> Result<GroupReport, AppError> {
        self.formatter.write_group_header(group, writer)?;

        let declarations = manifest.group(group);
        let mut results = Vec::with_capacity(declarations.len());

        for dependency in declarations {
            if self.verbose {
                eprintln!(
                    "Fetching {} from {}",
                    dependency.name,
                    self.registry.base_url()
                );
            }

            let latest = self.registry.latest_version(&dependency.name).await?;
            let result = self.checker.judge(dependency, latest);

            self.formatter.write_row(&result, writer)?;
            results.push(result);
        }

        self.formatter.write_group_footer(writer)?;

        Ok(GroupReport { group, results })
    }
}

/// Load the manifest named by `config` and print its report
///
/// A missing manifest is reported on `writer` without any lookups.
pub async fn run(config: &RunConfig, writer: &mut dyn Write) -> Result<RunOutcome, AppError> {
    let formatter = TextFormatter::with_color(config.color);

    if config.verbose {
        eprintln!("outdates v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", config.manifest_path.display());
    }

    let manifest = match load_manifest(&config.manifest_path) {
        Ok(manifest) => manifest,
        Err(err @ ManifestError::NotFound { .. }) => {
            formatter.write_error(&err.to_string(), writer)?;
            return Ok(RunOutcome::ManifestNotFound);
        }
        Err(err) => return Err(err.into()),
    };

    let registry = config.registry_for(&manifest);
    if config.verbose {
        eprintln!("Registry: {} ({})", registry.url, registry.source);
    }

    let client = HttpClient::with_timeout(config.timeout)?;
    let orchestrator = Orchestrator::new(NpmRegistry::new(client, registry.url), formatter)
        .with_verbose(config.verbose);

    let reports = orchestrator.run(&manifest, writer).await?;
    Ok(RunOutcome::Completed(reports))
}
