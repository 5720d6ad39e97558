//! queryfmt - A keyword-aware SQL text formatter for query editors
//!
//! This library provides the formatting routine used by the `queryfmt` CLI
//! and by editor hosts that reformat the text of a query on demand.

pub mod cli;
pub mod error;
pub mod formatter;

pub use error::{Error, Result};
pub use formatter::format_sql;

/// Format SQL string and return the formatted result
pub fn format(input: &str) -> String {
    format_sql(input)
}

/// Format SQL string unless it is blank
///
/// Returns `None` when there is nothing to format.
pub fn try_format(input: &str) -> Option<String> {
    if formatter::trim_text(input).is_empty() {
        None
    } else {
        Some(format_sql(input))
    }
}

/// Check if SQL string is already formatted
pub fn check(input: &str) -> bool {
    formatter::is_formatted(input)
}
