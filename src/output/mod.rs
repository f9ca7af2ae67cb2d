//! Report output
//!
//! This module provides:
//! - Fixed-width column layout helpers
//! - Text output with highlighted outdated rows

mod text;

pub use text::TextFormatter;

/// Width of the group banner and horizontal rules
pub const BANNER_WIDTH: usize = 60;

/// Width of the package name column
pub const NAME_WIDTH: usize = 40;

/// Width of the declared version column
pub const VERSION_WIDTH: usize = 10;

/// Width of the latest version column
pub const LATEST_WIDTH: usize = 10;

/// Left-align `text` in a column of `width` characters; longer text is kept whole
pub fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Center `text` in a field of `width` characters, extra space going right
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let before = width.saturating_sub(len) / 2;
    let after = width.saturating_sub(len + before);
    format!("{}{}{}", " ".repeat(before), text, " ".repeat(after))
}

/// A horizontal rule of `width` dashes
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// One table row: name, declared version, latest version
pub fn table_row(name: &str, version: &str, latest: &str) -> String {
    format!(
        "{}{}{}",
        pad_right(name, NAME_WIDTH),
        pad_right(version, VERSION_WIDTH),
        pad_right(latest, LATEST_WIDTH)
    )
}
