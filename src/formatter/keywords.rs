//! Keyword vocabulary and case normalization
//!
//! Keywords are matched as standalone tokens, case-insensitively. Phrases
//! such as `GROUP BY` match with any run of whitespace between their words
//! and are rewritten with a single space.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Recognized keywords, in the order the casing pass applies them.
///
/// Each pass runs over the output of the previous one, so the order is
/// observable when two phrases share a word (`JOIN` runs before `LEFT JOIN`).
pub const KEYWORDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "HAVING",
    "GROUP BY",
    "ORDER BY",
    "LIMIT",
    "JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "INNER JOIN",
    "OUTER JOIN",
    "FULL JOIN",
    "ON",
    "AS",
    "AND",
    "OR",
    "NOT",
    "IN",
    "EXISTS",
    "BETWEEN",
    "LIKE",
    "INSERT INTO",
    "VALUES",
    "UPDATE",
    "SET",
    "DELETE FROM",
    "CREATE TABLE",
    "ALTER TABLE",
    "DROP TABLE",
    "TRUNCATE TABLE",
    "BEGIN",
    "COMMIT",
    "ROLLBACK",
    "WITH",
];

struct KeywordPattern {
    canonical: &'static str,
    regex: Regex,
}

static KEYWORD_PATTERNS: LazyLock<Vec<KeywordPattern>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|&keyword| KeywordPattern {
            canonical: keyword,
            regex: Regex::new(&keyword_pattern(keyword)).expect("keyword patterns are valid regexes"),
        })
        .collect()
});

/// Build the matcher source for a keyword or phrase
///
/// Every word is matched with ASCII case folding and ASCII word boundaries
/// on both sides; the words of a phrase are joined by `\s+`.
pub fn keyword_pattern(keyword: &str) -> String {
    let words: Vec<String> = keyword
        .split_whitespace()
        .map(|word| format!(r"(?i-u:\b{}\b)", regex::escape(word)))
        .collect();
    words.join(r"\s+")
}

/// Rewrite every standalone keyword occurrence in its canonical upper case
pub fn uppercase_keywords(sql: &str) -> String {
    let mut result = sql.to_string();

    for pattern in KEYWORD_PATTERNS.iter() {
        if let Cow::Owned(replaced) = pattern.regex.replace_all(&result, NoExpand(pattern.canonical)) {
            result = replaced;
        }
    }

    result
}
