//! `MySQL`/`MariaDB` schema source.

use std::str::FromStr;

use ctx_config::{ConfigError, DatabaseConfig};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use crate::error::DatabaseError;
use crate::source::SchemaSource;

/// Schema source backed by a single pooled `MySQL` connection.
pub struct MySqlSource {
    pool: MySqlPool,
}

impl MySqlSource {
    /// Connect using the `[database]` config section.
    ///
    /// A non-empty `url` wins over the individual host/port/credential fields.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Config` when no database is named and
    /// `DatabaseError::MySql` when the connection fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if !config.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "database".to_string(),
            }
            .into());
        }

        let options = connect_options(config)?;
        tracing::debug!(host = %config.host, port = config.port, "connecting to mysql");
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }
}

fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, DatabaseError> {
    if !config.url.is_empty() {
        return Ok(MySqlConnectOptions::from_str(&config.url)?);
    }

    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .database(&config.database);
    if !config.password.is_empty() {
        options = options.password(&config.password);
    }
    Ok(options)
}

/// Quote an identifier for `MySQL`, doubling embedded backticks.
fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// SQLSTATE `42S02`: base table or view not found.
fn is_missing_table(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.code().as_deref() == Some("42S02"))
}

/// Read a text column that the server may report as binary.
fn text_column(row: &MySqlRow, index: usize) -> Result<String, DatabaseError> {
    match row.try_get::<String, _>(index) {
        Ok(value) => Ok(value),
        Err(_) => {
            let bytes = row.try_get::<Vec<u8>, _>(index)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

impl SchemaSource for MySqlSource {
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let rows = sqlx::query("SHOW TABLES").fetch_all(&self.pool).await?;
        rows.iter().map(|row| text_column(row, 0)).collect()
    }

    async fn show_create_table(&self, table: &str) -> Result<Option<String>, DatabaseError> {
        let sql = format!("SHOW CREATE TABLE {}", quote_identifier(table));
        let row = match sqlx::query(&sql).fetch_optional(&self.pool).await {
            Ok(row) => row,
            Err(error) if is_missing_table(&error) => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        // Column 0 is the table name, column 1 the statement.
        row.map(|row| text_column(&row, 1)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_backtick_quoted() {
        assert_eq!(quote_identifier("users"), "`users`");
        assert_eq!(quote_identifier("odd`name"), "`odd``name`");
    }

    #[test]
    fn url_is_parsed_when_present() {
        let config = DatabaseConfig {
            url: "mysql://reader:pw@db.internal:3307/shop".into(),
            ..Default::default()
        };
        assert!(connect_options(&config).is_ok());
    }

    #[test]
    fn fields_build_options_without_url() {
        let config = DatabaseConfig {
            host: "mysql".into(),
            port: 3310,
            database: "laravel".into(),
            username: "sail".into(),
            password: "password".into(),
            ..Default::default()
        };
        assert!(connect_options(&config).is_ok());
    }

    #[test]
    fn malformed_url_is_rejected() {
        let config = DatabaseConfig {
            url: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(connect_options(&config), Err(DatabaseError::MySql(_))));
    }

    #[tokio::test]
    async fn unconfigured_database_fails_before_connecting() {
        let result = MySqlSource::connect(&DatabaseConfig::default()).await;
        assert!(matches!(result, Err(DatabaseError::Config(_))));
    }
}
