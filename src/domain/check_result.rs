//! Outcome of checking one dependency against its latest release

use super::DependencyDeclaration;
use std::fmt;

/// Displayed in place of the latest version when the registry has none
pub const UNKNOWN_VERSION: &str = "unknown";

/// Classification of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// Latest release satisfies the declared range
    Current,
    /// Latest release falls outside the declared range, or could not be resolved
    Outdated,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Current => write!(f, "current"),
            CheckStatus::Outdated => write!(f, "outdated"),
        }
    }
}

/// Result of checking a single dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Package name
    pub name: String,
    /// Declared version range, verbatim
    pub declared: String,
    /// Latest published version, if the registry reported one
    pub latest: Option<String>,
    /// Classification
    pub status: CheckStatus,
}

impl CheckResult {
    /// Creates a result for a declaration
    pub fn new(
        dependency: &DependencyDeclaration,
        latest: Option<String>,
        status: CheckStatus,
    ) -> Self {
        Self {
            name: dependency.name.clone(),
            declared: dependency.range.clone(),
            latest,
            status,
        }
    }

    /// The latest version as shown in the report
    pub fn latest_display(&self) -> &str {
        self.latest.as_deref().unwrap_or(UNKNOWN_VERSION)
    }

    /// Returns true if this row should be highlighted
    pub fn is_outdated(&self) -> bool {
        self.status == CheckStatus::Outdated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_display_known() {
        let dep = DependencyDeclaration::new("foo", "^1.0.0");
        let result = CheckResult::new(&dep, Some("1.2.0".to_string()), CheckStatus::Current);
        assert_eq!(result.latest_display(), "1.2.0");
        assert!(!result.is_outdated());
    }

    #[test]
    fn test_latest_display_unknown() {
        let dep = DependencyDeclaration::new("foo", "^1.0.0");
        let result = CheckResult::new(&dep, None, CheckStatus::Outdated);
        assert_eq!(result.latest_display(), "unknown");
        assert!(result.is_outdated());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CheckStatus::Current.to_string(), "current");
        assert_eq!(CheckStatus::Outdated.to_string(), "outdated");
    }
}
