//! SQLite schema source over libSQL.

use std::path::Path;

use libsql::Builder;

use crate::error::DatabaseError;
use crate::source::SchemaSource;

/// Schema source for a local SQLite database file.
pub struct SqliteSource {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SqliteSource {
    /// Open the database at `path` (`:memory:` is accepted).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` when a file path does not exist (libSQL
    /// would otherwise create an empty database) and `DatabaseError::LibSql`
    /// when opening fails.
    pub async fn open(path: &Path) -> Result<Self, DatabaseError> {
        if path != Path::new(":memory:") && !path.exists() {
            return Err(DatabaseError::Query(format!(
                "SQLite database not found at {}",
                path.display()
            )));
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Ok(Self { db, conn })
    }
}

impl SchemaSource for SqliteSource {
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                 ORDER BY name",
                (),
            )
            .await?;

        let mut tables = Vec::new();
        while let Some(row) = rows.next().await? {
            tables.push(row.get::<String>(0)?);
        }
        Ok(tables)
    }

    async fn show_create_table(&self, table: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT sql FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
                libsql::params![table],
            )
            .await?;

        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        match row.get_value(0)? {
            libsql::Value::Text(sql) => Ok(Some(sql)),
            _ => Ok(None),
        }
    }
}
