//! Outdated dependency detection
//!
//! A dependency is current when the registry's latest release satisfies the
//! declared range. A missing latest version is reported as outdated so it
//! stands out in the report.

use crate::domain::{CheckResult, CheckStatus, DependencyDeclaration};
use crate::parser;

/// Classifies declarations against resolved latest versions
#[derive(Debug, Clone, Copy, Default)]
pub struct OutdatedChecker;

impl OutdatedChecker {
    /// Create a new checker
    pub fn new() -> Self {
        Self
    }

    /// Judge a declaration given the registry's latest version
    pub fn judge(&self, dependency: &DependencyDeclaration, latest: Option<String>) -> CheckResult {
        let status = match latest.as_deref() {
            Some(version) if parser::satisfies(version, &dependency.range) => CheckStatus::Current,
            _ => CheckStatus::Outdated,
        };

        CheckResult::new(dependency, latest, status)
    }
}
