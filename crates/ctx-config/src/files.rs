//! File catalog configuration.

use ctx_core::defaults;
use serde::{Deserialize, Serialize};

fn default_include_dirs() -> Vec<String> {
    defaults::to_owned_list(defaults::INCLUDED_DIRS)
}

fn default_exclude_dirs() -> Vec<String> {
    defaults::to_owned_list(defaults::EXCLUDED_DIRS)
}

fn default_extension() -> String {
    defaults::SOURCE_EXTENSION.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    /// Top-level directories a candidate must start with.
    #[serde(default = "default_include_dirs")]
    pub include_dirs: Vec<String>,

    /// Names that exclude a path when found anywhere in it.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Source-file extension without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            include_dirs: default_include_dirs(),
            exclude_dirs: default_exclude_dirs(),
            extension: default_extension(),
        }
    }
}

impl FilesConfig {
    /// Extension with any leading dot removed (`.php` and `php` are equivalent).
    #[must_use]
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
