//! # ctx-store
//!
//! Named setups persisted as one pretty-printed JSON array.
//!
//! Reads are permissive: a missing or unparsable store is an empty one.
//! Writes replace the whole file through a sibling temp file, so a crash
//! mid-write never leaves half a document behind.

mod error;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ctx_core::Setup;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

pub use error::StoreError;

/// Setup store backed by a single file.
#[derive(Debug, Clone)]
pub struct SetupStore {
    path: PathBuf,
}

impl SetupStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored setup, in file order.
    ///
    /// Never fails: unreadable or malformed content is logged and treated as
    /// an empty store.
    #[must_use]
    pub fn load(&self) -> Vec<Setup> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "cannot read setup store");
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Setup>>(&content) {
            Ok(setups) => setups,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "setup store is not a list of setups; ignoring it"
                );
                Vec::new()
            }
        }
    }

    /// Store `setup` on top of `existing` and write the result.
    ///
    /// An existing setup with the same name is replaced; the new one goes to
    /// the end. Returns the sequence that was written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` when the file cannot be written.
    pub fn save(&self, setup: Setup, existing: Vec<Setup>) -> Result<Vec<Setup>, StoreError> {
        let mut setups: Vec<Setup> = existing
            .into_iter()
            .filter(|stored| stored.name != setup.name)
            .collect();
        setups.push(setup);

        self.write(&setups)?;
        tracing::debug!(path = %self.path.display(), count = setups.len(), "saved setups");
        Ok(setups)
    }

    fn write(&self, setups: &[Setup]) -> Result<(), StoreError> {
        let mut json = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
        setups.serialize(&mut serializer)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(write_err)?;
        let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
        temp.write_all(&json).map_err(write_err)?;
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
