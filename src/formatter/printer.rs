//! Line printer with `CASE ... END` block indentation
//!
//! Lines are trimmed and re-indented by block depth. An `END` line closes
//! its block before it is printed; a `CASE` line opens one after it is
//! printed.

use regex::Regex;
use std::sync::LazyLock;

/// Indentation size (2 spaces)
pub const INDENT_SIZE: usize = 2;

static BLOCK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i-u:CASE\b)").expect("block pattern is a valid regex"));
static BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i-u:END\b)").expect("block pattern is a valid regex"));

/// Printer state
pub struct Printer {
    output: String,
    indent_level: usize,
    line_count: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            line_count: 0,
        }
    }

    /// Write a line at the current indentation
    ///
    /// Empty text still receives the indentation prefix.
    pub fn line(&mut self, text: &str) {
        if self.line_count > 0 {
            self.output.push('\n');
        }
        self.output.push_str(&" ".repeat(self.indent_level * INDENT_SIZE));
        self.output.push_str(text);
        self.line_count += 1;
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Current indentation level
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Get the output string
    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-indent every line of `text` by its `CASE` nesting depth
pub fn indent_blocks(text: &str) -> String {
    let mut printer = Printer::new();

    for line in text.split('\n') {
        let trimmed = super::trim_text(line);

        if BLOCK_CLOSE.is_match(trimmed) {
            printer.dedent();
        }

        printer.line(trimmed);

        if BLOCK_OPEN.is_match(trimmed) {
            printer.indent();
        }
    }

    printer.finish()
}
