//! Database connection configuration.
//!
//! Field names follow Laravel's `DB_*` variables so a project's own `.env`
//! configures the connection (`DB_HOST` -> `database.host`, and so on).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::ConfigError;

/// Default connection driver.
fn default_connection() -> String {
    "mysql".to_string()
}

/// Default database host.
fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default `MySQL` port.
const fn default_port() -> u16 {
    3306
}

/// SQLite database file used by Laravel when `DB_DATABASE` is unset.
const DEFAULT_SQLITE_PATH: &str = "database/database.sqlite";

/// Supported database drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// `MySQL` or `MariaDB`.
    MySql,
    /// A local SQLite file.
    Sqlite,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Driver name: `mysql`, `mariadb`, or `sqlite`.
    #[serde(default = "default_connection", deserialize_with = "lenient_string")]
    pub connection: String,

    /// Full connection URL. Takes precedence over the individual fields.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,

    #[serde(default = "default_host", deserialize_with = "lenient_string")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Schema name for `MySQL`, file path for SQLite.
    #[serde(default, deserialize_with = "lenient_string")]
    pub database: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection: default_connection(),
            url: String::new(),
            host: default_host(),
            port: default_port(),
            database: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Resolve the configured driver.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for drivers other than
    /// `mysql`, `mariadb`, and `sqlite`.
    pub fn driver(&self) -> Result<Driver, ConfigError> {
        match self.connection.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Driver::MySql),
            "sqlite" => Ok(Driver::Sqlite),
            other => Err(ConfigError::InvalidValue {
                field: "database.connection".to_string(),
                reason: format!("unsupported driver '{other}' (expected mysql, mariadb, or sqlite)"),
            }),
        }
    }

    /// Check if the config names a database to connect to.
    ///
    /// SQLite always resolves to a file, so it is always configured.
    pub fn is_configured(&self) -> bool {
        match self.driver() {
            Ok(Driver::MySql) => !self.url.is_empty() || !self.database.is_empty(),
            Ok(Driver::Sqlite) => true,
            Err(_) => false,
        }
    }

    /// SQLite database file, resolved against the project root.
    #[must_use]
    pub fn sqlite_path(&self, project_root: &Path) -> PathBuf {
        let raw = if self.database.is_empty() {
            DEFAULT_SQLITE_PATH
        } else {
            self.database.as_str()
        };
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }
}

/// Accept scalars of any type for string fields.
///
/// Environment values such as `DB_PASSWORD=123456` reach figment as numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
        Flag(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(value) => value,
        Scalar::Signed(value) => value.to_string(),
        Scalar::Unsigned(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
        Scalar::Flag(value) => value.to_string(),
    })
}
