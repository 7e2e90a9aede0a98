//! Directory allow/deny rules and the extension filter.

use std::path::{MAIN_SEPARATOR_STR, Path};

use ctx_config::FilesConfig;

/// Which project-relative paths are candidates for selection.
///
/// Directory comparisons are case-insensitive; the extension comparison is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRules {
    include_dirs: Vec<String>,
    exclude_dirs: Vec<String>,
    extension: String,
}

impl DirectoryRules {
    #[must_use]
    pub fn new(include_dirs: &[String], exclude_dirs: &[String], extension: &str) -> Self {
        Self {
            include_dirs: lowercase_all(include_dirs),
            exclude_dirs: lowercase_all(exclude_dirs),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &FilesConfig) -> Self {
        Self::new(
            &config.include_dirs,
            &config.exclude_dirs,
            config.normalized_extension(),
        )
    }

    /// True when any excluded name occurs anywhere in `path`.
    ///
    /// This is a plain substring test, so it also fires when the name is only
    /// part of a segment: `app/storage_config/Disk.php` is excluded by
    /// `storage`.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        let path = path.to_lowercase();
        self.exclude_dirs.iter().any(|dir| path.contains(dir.as_str()))
    }

    /// True when `path` starts with an allowed directory as a whole segment.
    #[must_use]
    pub fn is_included(&self, path: &str) -> bool {
        let path = path.to_lowercase();
        self.include_dirs
            .iter()
            .any(|dir| path.starts_with(&format!("{dir}{MAIN_SEPARATOR_STR}")))
    }

    /// True when the file extension equals the configured source extension.
    #[must_use]
    pub fn has_source_extension(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.extension)
    }

    /// Full candidate test: not excluded, included, and a source file.
    #[must_use]
    pub fn accepts(&self, path: &str) -> bool {
        !self.is_excluded(path) && self.is_included(path) && self.has_source_extension(path)
    }
}

impl Default for DirectoryRules {
    fn default() -> Self {
        Self::from_config(&FilesConfig::default())
    }
}

fn lowercase_all(items: &[String]) -> Vec<String> {
    items.iter().map(|item| item.to_lowercase()).collect()
}
