//! # ctx-core
//!
//! Core types shared across all ctxgen crates:
//! - The [`Setup`] record persisted between runs
//! - Built-in defaults (denylists, allow-lists, file names, the bundle postscript)
//! - Setup name generation

pub mod defaults;
pub mod naming;
pub mod setup;

pub use setup::Setup;
