//! # ctx-db
//!
//! Database introspection for ctxgen: which tables exist, and what their
//! CREATE statements look like once comments and volatile auto-increment
//! counters are stripped.
//!
//! The catalog talks to the database through the [`SchemaSource`] trait.
//! [`DatabaseSource`] picks the concrete driver from the `[database]` config:
//! `MySQL`/`MariaDB` through `sqlx`, SQLite files through `libsql`.

pub mod catalog;
pub mod error;
pub mod mysql;
pub mod sanitize;
pub mod source;
pub mod sqlite;

use std::path::Path;

use ctx_config::{DatabaseConfig, Driver};

pub use catalog::{SchemaDump, TableCatalog};
pub use error::DatabaseError;
pub use mysql::MySqlSource;
pub use source::SchemaSource;
pub use sqlite::SqliteSource;

/// A connected database, whichever driver the project uses.
pub enum DatabaseSource {
    MySql(MySqlSource),
    Sqlite(SqliteSource),
}

impl DatabaseSource {
    /// Connect according to `config`.
    ///
    /// Relative SQLite paths resolve against `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Config` for unsupported or incomplete settings
    /// and driver errors when the connection cannot be established.
    pub async fn connect(
        config: &DatabaseConfig,
        project_root: &Path,
    ) -> Result<Self, DatabaseError> {
        match config.driver()? {
            Driver::MySql => Ok(Self::MySql(MySqlSource::connect(config).await?)),
            Driver::Sqlite => {
                let path = config.sqlite_path(project_root);
                tracing::debug!(path = %path.display(), "opening sqlite database");
                Ok(Self::Sqlite(SqliteSource::open(&path).await?))
            }
        }
    }
}

impl SchemaSource for DatabaseSource {
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        match self {
            Self::MySql(source) => source.list_tables().await,
            Self::Sqlite(source) => source.list_tables().await,
        }
    }

    async fn show_create_table(&self, table: &str) -> Result<Option<String>, DatabaseError> {
        match self {
            Self::MySql(source) => source.show_create_table(table).await,
            Self::Sqlite(source) => source.show_create_table(table).await,
        }
    }
}
