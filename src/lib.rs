//! outdates - npm outdated dependency reporter library
//!
//! This library provides the pieces of the `outdates` tool:
//! - package.json loading (dependencies, devDependencies, publishConfig)
//! - npm registry lookups of the `latest` dist-tag
//! - npm range satisfaction on top of the `semver` crate
//! - the aligned, colorized text report

pub mod check;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod registry;
