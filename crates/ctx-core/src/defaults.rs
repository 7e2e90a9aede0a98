//! Built-in defaults for a Laravel project.
//!
//! Every list here can be overridden through `ctx-config`.

/// Label of the setup-choice option that starts from an empty selection.
pub const NEW_SETUP_LABEL: &str = "<New Setup>";

/// Framework bookkeeping tables that never carry domain schema.
pub const EXCLUDED_TABLES: &[&str] = &[
    "cache",
    "cache_locks",
    "failed_jobs",
    "job_batches",
    "jobs",
    "migrations",
    "password_reset_tokens",
    "telescope_entries",
    "telescope_entries_tags",
    "telescope_monitoring",
];

/// Top-level directories whose files are offered for selection.
pub const INCLUDED_DIRS: &[&str] = &["app", "routes", "config", "resources", "tests", "database"];

/// Directory names that exclude a path wherever they appear in it.
pub const EXCLUDED_DIRS: &[&str] = &[
    "vendor",
    "node_modules",
    "bootstrap",
    "docker",
    "lang",
    "storage",
    "mysql",
];

/// Source-file extension of the project, without the dot.
pub const SOURCE_EXTENSION: &str = "php";

/// Bundle output file, relative to the project root.
pub const BUNDLE_FILE: &str = "gpt_setup.txt";

/// Setup store file, relative to the project root.
pub const STORE_FILE: &str = ".suggests.txt";

/// Files above this size are still bundled but not confirmed on the console.
pub const REPORT_THRESHOLD_BYTES: u64 = 13_000;

/// Instructions appended to every bundle.
pub const POSTSCRIPT: &str = "
            - Behave as a professional programmer and person who is a database architect engineer.\n
            - Use db structure and project files to answer questions.\n
            - If you suggest a migration use anonymous classes instead of named ones\n
            ";

/// Owned copy of a static list.
#[must_use]
pub fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
