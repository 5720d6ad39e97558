//! SQL text formatting
//!
//! A heuristic rewriter, not a parser: keywords are found by pattern over
//! the raw text, so keywords inside string literals or comments are
//! rewritten too.

pub mod keywords;
pub mod layout;
pub mod printer;

use tracing::debug;

/// Format SQL string
pub fn format_sql(input: &str) -> String {
    // Step 1: Trim
    let sql = trim_text(input);
    debug!(pass = "trim", bytes = sql.len(), "pass complete");

    // Step 2: Normalize keyword case
    let sql = keywords::uppercase_keywords(sql);
    debug!(pass = "keywords", bytes = sql.len(), "pass complete");

    // Step 3: Normalize spacing around commas and parentheses
    let sql = layout::normalize_punctuation(&sql);
    debug!(pass = "punctuation", bytes = sql.len(), "pass complete");

    // Step 4: Break lines before clauses, joins, conditions and CASE blocks
    let sql = layout::break_clauses(&sql);
    debug!(pass = "line_breaks", bytes = sql.len(), "pass complete");

    // Step 5: Indent CASE blocks
    let formatted = printer::indent_blocks(&sql);
    debug!(pass = "indent", lines = formatted.lines().count(), "pass complete");

    formatted
}

/// Strip surrounding whitespace, including a byte-order mark
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Check whether `input` already has the layout `format_sql` produces
///
/// Every pass re-inserts line breaks in front of keywords that already
/// start a line, so formatting formatted text only adds blank lines. Blank
/// lines are therefore ignored in the comparison.
pub fn is_formatted(input: &str) -> bool {
    let formatted = format_sql(input);
    non_blank_lines(&formatted).eq(non_blank_lines(input))
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}
