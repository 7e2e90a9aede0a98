//! Candidate file listing.

use std::path::Path;

use crate::error::FileError;
use crate::rules::DirectoryRules;
use crate::walk::{FileLister, WalkLister};

/// Project files offered for selection.
pub struct FileCatalog<L> {
    lister: L,
    rules: DirectoryRules,
}

impl FileCatalog<WalkLister> {
    /// Catalog over the real project tree, pruning excluded directories.
    #[must_use]
    pub fn for_project(root: &Path, rules: DirectoryRules) -> Self {
        let lister = WalkLister::new(root).prune_excluded(rules.clone());
        Self::new(lister, rules)
    }
}

impl<L: FileLister> FileCatalog<L> {
    #[must_use]
    pub const fn new(lister: L, rules: DirectoryRules) -> Self {
        Self { lister, rules }
    }

    /// Every listed file the rules accept, in enumeration order.
    ///
    /// # Errors
    ///
    /// Propagates lister failures.
    pub fn list_candidate_files(&self) -> Result<Vec<String>, FileError> {
        let candidates: Vec<String> = self
            .lister
            .list_files()?
            .into_iter()
            .filter(|path| self.rules.accepts(path))
            .collect();
        tracing::debug!(count = candidates.len(), "candidate files");
        Ok(candidates)
    }
}
