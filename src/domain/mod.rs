//! Core domain models for outdates
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency declarations and the manifest group they come from
//! - Check results and their status

mod check_result;
mod dependency;

pub use check_result::{CheckResult, CheckStatus, UNKNOWN_VERSION};
pub use dependency::{DependencyDeclaration, DependencyGroup};
