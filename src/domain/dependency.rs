//! Dependency declaration structures

use std::fmt;

/// The manifest section a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyGroup {
    /// Runtime dependencies (`dependencies`)
    Runtime,
    /// Development dependencies (`devDependencies`)
    Development,
}

impl DependencyGroup {
    /// Returns the package.json key for this group
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyGroup::Runtime => "dependencies",
            DependencyGroup::Development => "devDependencies",
        }
    }

    /// Returns the title printed above this group's table
    pub fn title(&self) -> &'static str {
        self.manifest_key()
    }

    /// Returns all groups in report order
    pub fn all() -> &'static [DependencyGroup] {
        &[DependencyGroup::Runtime, DependencyGroup::Development]
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A dependency as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    /// Package name
    pub name: String,
    /// Declared version range, verbatim
    pub range: String,
}

impl DependencyDeclaration {
    /// Creates a new declaration
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: range.into(),
        }
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.range)
    }
}
