//! npm version range parser
//!
//! Handles range formats:
//! - Exact: `1.2.3`, `=1.2.3`, `v1.2.3`
//! - Caret: `^1.2.3`
//! - Tilde: `~1.2.3`, `~>1.2.3`
//! - Comparison: `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3`
//! - Wildcard: `*`, `x`, `1.x`, `1.2.*`, partial versions like `1.2`
//! - Intersection: `>=1.0.0 <2.0.0`
//! - Hyphen: `1.0.0 - 2.0.0`
//! - Union: `^1.0.0 || ^2.0.0`

use regex::Regex;
use semver::{Version, VersionReq};
use std::sync::LazyLock;

static HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+-\s+(\S+)\s*$").unwrap());

/// Operators in match order (longest first)
const OPERATORS: &[&str] = &[">=", "<=", "~>", ">", "<", "=", "^", "~"];

/// A parsed npm range: a union of comparator sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRange {
    /// Satisfiable comparator sets; an empty list matches nothing
    sets: Vec<VersionReq>,
}

/// One translated comparator token
#[derive(Debug, PartialEq, Eq)]
enum Term {
    /// Matches every release (e.g. `*`, `>=x`)
    Any,
    /// Matches nothing (e.g. `<*`)
    Never,
    /// A comparator in `semver` syntax
    Comparator(String),
}

impl NodeRange {
    /// Parse an npm range expression
    ///
    /// Returns `None` if any alternative is not a valid range.
    pub fn parse(range: &str) -> Option<Self> {
        let mut sets = Vec::new();

        for alternative in range.split("||") {
            let terms = if let Some(caps) = HYPHEN_RE.captures(alternative) {
                vec![
                    translate(&format!(">={}", &caps[1]))?,
                    translate(&format!("<={}", &caps[2]))?,
                ]
            } else {
                tokenize(alternative)
                    .iter()
                    .map(|token| translate(token))
                    .collect::<Option<Vec<_>>>()?
            };

            if terms.contains(&Term::Never) {
                continue;
            }

            let comparators: Vec<String> = terms
                .into_iter()
                .filter_map(|term| match term {
                    Term::Comparator(c) => Some(c),
                    Term::Any | Term::Never => None,
                })
                .collect();

            let req = if comparators.is_empty() {
                VersionReq::STAR
            } else {
                VersionReq::parse(&comparators.join(", ")).ok()?
            };
            sets.push(req);
        }

        Some(Self { sets })
    }

    /// Returns true if any comparator set matches the version
    pub fn matches(&self, version: &Version) -> bool {
        self.sets.iter().any(|req| req.matches(version))
    }
}

/// Split a comparator set on whitespace, joining a bare operator with
/// the version that follows it (`>= 1.2.3` -> `>=1.2.3`)
fn tokenize(set: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending_op: Option<String> = None;

    for word in set.split_whitespace() {
        let token = match pending_op.take() {
            Some(op) => format!("{}{}", op, word),
            None => word.to_string(),
        };

        if OPERATORS.contains(&token.as_str()) {
            pending_op = Some(token);
        } else {
            tokens.push(token);
        }
    }

    // A dangling operator is kept so that translation rejects it
    if let Some(op) = pending_op {
        tokens.push(op);
    }

    tokens
}

/// Translate one npm comparator into `semver` syntax
fn translate(token: &str) -> Option<Term> {
    if token.contains(',') {
        return None;
    }

    let op = OPERATORS
        .iter()
        .find(|op| token.starts_with(**op))
        .copied()
        .unwrap_or("");
    let rest = token[op.len()..].trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest);
    let rest = rest.strip_prefix('v').unwrap_or(rest);
    let op = if op == "~>" { "~" } else { op };

    if rest.is_empty() {
        return None;
    }

    // Build metadata never affects matching
    let rest = rest.split('+').next().unwrap_or(rest);
    let (core, pre) = match rest.find('-') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };

    let components: Vec<&str> = core.split('.').collect();
    if components.len() > 3 {
        return None;
    }

    let mut kept = Vec::new();
    for component in &components {
        if matches!(*component, "x" | "X" | "*") {
            break;
        }
        if component.is_empty() || !component.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        kept.push(*component);
    }

    if kept.is_empty() {
        return match op {
            ">" | "<" => Some(Term::Never),
            _ => Some(Term::Any),
        };
    }

    // Partial versions (`1.2`) carry no prerelease
    if kept.len() < 3 && !pre.is_empty() {
        return None;
    }

    let op = if op.is_empty() { "=" } else { op };
    let pre = if kept.len() == 3 { pre } else { "" };
    Some(Term::Comparator(format!("{}{}{}", op, kept.join("."), pre)))
}
