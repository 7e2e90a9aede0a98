//! Setup name generation.

use chrono::{DateTime, Local, TimeZone};

/// Derive a setup name from the selected tables and files.
///
/// Tables are joined with `", "`, file base names are joined with `", "`, the
/// two parts are joined with `_` and stray leading/trailing underscores are
/// trimmed. An empty result falls back to `setup_<YYYYMMDD_HHMMSS>`.
#[must_use]
pub fn setup_name(tables: &[String], files: &[String]) -> String {
    setup_name_at(tables, files, &Local::now())
}

/// [`setup_name`] with an explicit clock, for deterministic callers.
#[must_use]
pub fn setup_name_at<Tz>(tables: &[String], files: &[String], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let tables_part = tables.join(", ");
    let files_part = files
        .iter()
        .map(|file| base_name(file))
        .collect::<Vec<_>>()
        .join(", ");

    let name = format!("{tables_part}_{files_part}")
        .trim_matches('_')
        .to_string();

    if name.is_empty() {
        format!("setup_{}", now.format("%Y%m%d_%H%M%S"))
    } else {
        name
    }
}

/// Final path segment, accepting either separator.
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
