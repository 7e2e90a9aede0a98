//! # ctx-files
//!
//! Project-side half of ctxgen: which source files may be selected, and how
//! the selected files are written into the bundle.

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod rules;
pub mod walk;

pub use bundle::{AppendedFile, BundleReport, BundleWriter};
pub use catalog::FileCatalog;
pub use error::FileError;
pub use rules::DirectoryRules;
pub use walk::{FileLister, WalkLister};
