//! Punctuation spacing and clause line breaks
//!
//! Both passes are plain pattern rewrites over the text. Line breaks are
//! inserted in front of keywords; leading indentation is left to the
//! printer, which trims every line.

use regex::Regex;
use std::sync::LazyLock;

static COMMA: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*,\s*"));
static OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| compile(r"\(\s+"));
static CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+\)"));

/// Clause keywords that start a new line, keeping the matched text
static CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i-u:\b(SELECT|FROM|WHERE|GROUP BY|ORDER BY|HAVING|LIMIT)\b)"));

/// `JOIN` with an optional qualifier; the break goes before the whole match
static JOIN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i-u:\b(LEFT|RIGHT|INNER|OUTER|FULL)?)\s*(?i-u:JOIN\b)"));

/// Keywords pushed onto their own line, written in upper case
const LINE_BREAKS: &[(&str, &str)] = &[
    ("ON", "\n  ON"),
    ("AND", "\n  AND"),
    ("OR", "\n  OR"),
    ("WHEN", "\n  WHEN"),
    ("ELSE", "\n  ELSE"),
    ("CASE", "\nCASE"),
    ("END", "\nEND"),
];

static LINE_BREAK_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    LINE_BREAKS
        .iter()
        .map(|&(keyword, replacement)| (compile(&format!(r"(?i-u:\b{keyword}\b)")), replacement))
        .collect()
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("layout patterns are valid regexes")
}

/// Normalize spacing around commas and just inside parentheses
///
/// `a ,b` becomes `a, b`; `( x )` becomes `(x)`.
pub fn normalize_punctuation(sql: &str) -> String {
    let sql = COMMA.replace_all(sql, ", ");
    let sql = OPEN_PAREN.replace_all(&sql, "(");
    let sql = CLOSE_PAREN.replace_all(&sql, ")");
    sql.into_owned()
}

/// Insert a newline in front of every clause, join and block keyword
pub fn break_clauses(sql: &str) -> String {
    let sql = CLAUSE.replace_all(sql, "\n${1}");
    let sql = JOIN.replace_all(&sql, "\n${0}");

    let mut result = sql.into_owned();
    for (regex, replacement) in LINE_BREAK_PATTERNS.iter() {
        result = regex.replace_all(&result, *replacement).into_owned();
    }
    result
}
