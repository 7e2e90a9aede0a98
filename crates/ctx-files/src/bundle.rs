//! Bundle file assembly.
//!
//! Layout: the schema dump, then for every selected file a newline, a
//! `File <path>` header line and the raw file content, then a newline and the
//! postscript. File content is copied byte for byte.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ctx_core::defaults::POSTSCRIPT;

use crate::error::FileError;

/// A file copied into the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedFile {
    pub path: String,
    pub size: u64,
    /// Whether the size is within the console confirmation threshold.
    pub reported: bool,
}

/// What went into a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleReport {
    pub appended: Vec<AppendedFile>,
    /// Selected files that no longer exist; they are left out.
    pub missing: Vec<String>,
}

/// Writes bundle files for one project.
#[derive(Debug, Clone)]
pub struct BundleWriter {
    project_root: PathBuf,
    report_threshold_bytes: u64,
    postscript: String,
}

impl BundleWriter {
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>, report_threshold_bytes: u64) -> Self {
        Self {
            project_root: project_root.into(),
            report_threshold_bytes,
            postscript: POSTSCRIPT.to_string(),
        }
    }

    #[must_use]
    pub fn with_postscript(mut self, postscript: impl Into<String>) -> Self {
        self.postscript = postscript.into();
        self
    }

    /// Write `schema_dump` plus `files` to `output`, replacing any previous
    /// content. Relative file paths resolve against the project root.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Io` when the output cannot be written or an
    /// existing file cannot be read.
    pub fn write(
        &self,
        output: &Path,
        schema_dump: &str,
        files: &[String],
    ) -> Result<BundleReport, FileError> {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FileError::io(parent, e))?;
        }
        let handle = File::create(output).map_err(|e| FileError::io(output, e))?;
        let mut out = BufWriter::new(handle);
        let mut report = BundleReport::default();

        out.write_all(schema_dump.as_bytes())
            .map_err(|e| FileError::io(output, e))?;

        for path in files {
            let source = self.project_root.join(path);
            if !source.is_file() {
                tracing::warn!(%path, "selected file not found");
                report.missing.push(path.clone());
                continue;
            }

            let content = std::fs::read(&source).map_err(|e| FileError::io(&source, e))?;
            write!(out, "\nFile {path}\n").map_err(|e| FileError::io(output, e))?;
            out.write_all(&content)
                .map_err(|e| FileError::io(output, e))?;

            let size = content.len() as u64;
            tracing::debug!(%path, size, "appended file");
            report.appended.push(AppendedFile {
                path: path.clone(),
                size,
                reported: size <= self.report_threshold_bytes,
            });
        }

        write!(out, "\n{}", self.postscript).map_err(|e| FileError::io(output, e))?;
        out.flush().map_err(|e| FileError::io(output, e))?;
        Ok(report)
    }
}
