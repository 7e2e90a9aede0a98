//! # ctx-config
//!
//! Layered configuration loading for ctxgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CTXGEN_*` prefix, `__` as separator)
//! 2. Laravel database variables (`DB_CONNECTION`, `DB_HOST`, ...), process
//!    environment over the project's `.env` file
//! 3. Project-level `.ctxgen/config.toml`
//! 4. User-level `~/.config/ctxgen/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CTXGEN_DATABASE__HOST` -> `database.host`,
//! `CTXGEN_OUTPUT__BUNDLE_FILE` -> `output.bundle_file`, etc.
//! The `__` (double underscore) separates nested config sections.
//! Laravel's `DB_HOST` maps to `database.host` as well, so a project's own
//! `.env` is enough to reach its database.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use ctx_config::CtxConfig;
//!
//! // Reads the project's `.env` for `DB_*` values, then TOML + env:
//! let config = CtxConfig::load_with_dotenv(Path::new(".")).expect("config");
//! if config.database.is_configured() {
//!     println!("database: {}", config.database.database);
//! }
//! ```

mod database;
mod error;
mod files;
mod output;
mod tables;

pub use database::{DatabaseConfig, Driver};
pub use error::ConfigError;
pub use files::FilesConfig;
pub use output::OutputConfig;
pub use tables::TablesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Laravel `DB_*` variables understood by the `[database]` section.
const LARAVEL_DB_KEYS: [&str; 7] = [
    "connection",
    "url",
    "host",
    "port",
    "database",
    "username",
    "password",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CtxConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub tables: TablesConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl CtxConfig {
    /// Load configuration for the project at `project_root`.
    ///
    /// Does NOT read the project's `.env` -- use [`Self::load_with_dotenv`]
    /// for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a provider holds malformed values.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment(project_root)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with the project's `.env` database variables.
    ///
    /// The file's `DB_*` values sit below the process environment, matching
    /// how Laravel itself treats `.env`. The process environment is not
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a provider holds malformed values.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let dotenv = Self::dotenv_database_values(&project_root.join(".env"));
        Self::layered(project_root, &dotenv)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        Self::layered(project_root, &[])
    }

    fn layered(project_root: &Path, dotenv: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Laravel database variables, `.env` first, then the process
        for (key, value) in dotenv {
            figment = match (key.as_str(), value.parse::<u16>()) {
                ("port", Ok(port)) => figment.merge(Serialized::default("database.port", port)),
                _ => figment.merge(Serialized::default(&format!("database.{key}"), value)),
            };
        }
        figment = figment.merge(
            Env::prefixed("DB_")
                .only(&LARAVEL_DB_KEYS)
                .map(|key| format!("database.{key}").into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("CTXGEN_").split("__"))
    }

    /// Read the known `DB_*` entries of a dotenv file as `(key, value)` pairs
    /// with the prefix stripped and the key lowercased.
    ///
    /// Silently yields nothing when the file is missing or unreadable.
    fn dotenv_database_values(path: &Path) -> Vec<(String, String)> {
        let Ok(entries) = dotenvy::from_path_iter(path) else {
            return Vec::new();
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|(key, value)| {
                let key = key.strip_prefix("DB_")?.to_ascii_lowercase();
                LARAVEL_DB_KEYS
                    .contains(&key.as_str())
                    .then_some((key, value))
            })
            .collect()
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(".ctxgen").join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ctxgen").join("config.toml"))
    }
}
