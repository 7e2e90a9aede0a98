//! Recursive project enumeration.
//!
//! Hidden files and directories are skipped; `.gitignore` and friends are not
//! consulted, so an ignored-but-present `app/` file is still a candidate.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::FileError;
use crate::rules::DirectoryRules;

/// Source of project-relative file paths.
pub trait FileLister {
    /// All files under the project, relative to its root.
    ///
    /// # Errors
    ///
    /// Returns an error when the project cannot be enumerated at all.
    fn list_files(&self) -> Result<Vec<String>, FileError>;
}

/// [`FileLister`] backed by an `ignore` walker.
#[derive(Debug, Clone)]
pub struct WalkLister {
    root: PathBuf,
    prune: Option<DirectoryRules>,
}

impl WalkLister {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prune: None,
        }
    }

    /// Skip descending into directories whose relative path `rules` excludes.
    ///
    /// Exclusion is a substring test, so no file beneath such a directory
    /// could be accepted anyway.
    #[must_use]
    pub fn prune_excluded(mut self, rules: DirectoryRules) -> Self {
        self.prune = Some(rules);
        self
    }

    fn build(&self) -> ignore::Walk {
        let mut builder = WalkBuilder::new(&self.root);
        builder.standard_filters(false);
        builder.hidden(true);
        builder.sort_by_file_name(|a, b| a.cmp(b));

        if let Some(rules) = self.prune.clone() {
            let root = self.root.clone();
            builder.filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                relative(&root, entry.path()).is_none_or(|rel| !rules.is_excluded(&rel))
            });
        }

        builder.build()
    }
}

impl FileLister for WalkLister {
    fn list_files(&self) -> Result<Vec<String>, FileError> {
        if !self.root.is_dir() {
            return Err(FileError::RootNotFound(self.root.clone()));
        }

        let mut files = Vec::new();
        for entry in self.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    tracing::warn!(%error, "skipping unreadable path");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if let Some(rel) = relative(&self.root, entry.path()) {
                files.push(rel);
            }
        }

        tracing::debug!(root = %self.root.display(), count = files.len(), "walked project");
        Ok(files)
    }
}

fn relative(root: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(root)
        .ok()
        .map(|rel| rel.to_string_lossy().into_owned())
}
