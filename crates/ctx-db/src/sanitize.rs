//! DDL clean-up for diff-stable schema dumps.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"));

// Line comments run to the end of the line or input and take the newline with them.
static DASH_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*(?:\n|$)").expect("valid dash comment regex"));

static HASH_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\n]*(?:\n|$)").expect("valid hash comment regex"));

static AUTO_INCREMENT_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)AUTO_INCREMENT\s*=\s*\d+ ?").expect("valid auto increment regex")
});

/// Strip `/* */`, `--`, and `#` comments.
#[must_use]
pub fn remove_comments(sql: &str) -> String {
    let sql = BLOCK_COMMENT.replace_all(sql, "");
    let sql = DASH_COMMENT.replace_all(&sql, "");
    HASH_COMMENT.replace_all(&sql, "").into_owned()
}

/// Drop table-level `AUTO_INCREMENT=<n>` counters.
///
/// Column attributes (`... NOT NULL AUTO_INCREMENT,`) carry no `=` and are kept.
#[must_use]
pub fn remove_auto_increment(sql: &str) -> String {
    AUTO_INCREMENT_COUNTER.replace_all(sql, "").into_owned()
}

/// Clean a CREATE statement and terminate it with exactly one semicolon.
#[must_use]
pub fn clean_create_statement(sql: &str) -> String {
    let cleaned = remove_auto_increment(&remove_comments(sql));
    let trimmed = cleaned.trim_end();
    if trimmed.ends_with(';') {
        trimmed.to_string()
    } else {
        format!("{trimmed};")
    }
}
