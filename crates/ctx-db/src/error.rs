//! Database error types for ctx-db.

use thiserror::Error;

/// Errors from schema introspection.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// The connection settings are incomplete or invalid.
    #[error(transparent)]
    Config(#[from] ctx_config::ConfigError),

    /// Underlying `MySQL` driver error.
    #[error("MySQL error: {0}")]
    MySql(#[from] sqlx::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
