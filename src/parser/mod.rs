//! Version range parsing
//!
//! npm range expressions (`^1.2.3`, `~1.2`, `>=1.0.0 <2.0.0 || 3.x`,
//! `1.0.0 - 2.0.0`) are translated into `semver::VersionReq` comparator sets,
//! so range satisfaction is always answered by the `semver` crate.

mod node;

pub use node::NodeRange;

use semver::Version;

/// Parse a published version string, tolerating a leading `v` or `=`
pub fn parse_version(version: &str) -> Option<Version> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('=').unwrap_or(trimmed).trim_start();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).ok()
}

/// Returns true if `version` satisfies the npm range `range`
///
/// Invalid versions and unparseable ranges never satisfy.
pub fn satisfies(version: &str, range: &str) -> bool {
    let Some(version) = parse_version(version) else {
        return false;
    };
    NodeRange::parse(range).is_some_and(|range| range.matches(&version))
}
