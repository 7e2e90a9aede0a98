//! Table listing, exclusion, and schema dumps.

use crate::error::DatabaseError;
use crate::sanitize::clean_create_statement;
use crate::source::SchemaSource;

/// Result of dumping a table selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDump {
    /// Cleaned statements, each followed by a blank line, in selection order.
    pub sql: String,
    /// Tables whose statement made it into `sql`.
    pub included: Vec<String>,
    /// Tables skipped because the database returned no statement.
    pub skipped: Vec<String>,
}

impl SchemaDump {
    /// Append the outcome for one table; `None` marks it skipped.
    pub fn record(&mut self, table: &str, statement: Option<String>) {
        match statement {
            Some(statement) => {
                self.sql.push_str(&statement);
                self.sql.push_str("\n\n");
                self.included.push(table.to_string());
            }
            None => self.skipped.push(table.to_string()),
        }
    }
}

/// Table catalog over an injected [`SchemaSource`].
pub struct TableCatalog<'a, S> {
    source: &'a S,
    excluded: Vec<String>,
}

impl<'a, S: SchemaSource> TableCatalog<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S, excluded: Vec<String>) -> Self {
        Self { source, excluded }
    }

    /// All tables known to the database.
    ///
    /// # Errors
    ///
    /// Propagates source failures.
    pub async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        self.source.list_tables().await
    }

    /// Tables offered for selection: the catalog minus the exclusion list,
    /// in catalog order.
    ///
    /// # Errors
    ///
    /// Propagates source failures.
    pub async fn selectable_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let tables = self.list_tables().await?;
        Ok(tables
            .into_iter()
            .filter(|table| !self.is_excluded(table))
            .collect())
    }

    /// Whether `table` is on the exclusion list.
    #[must_use]
    pub fn is_excluded(&self, table: &str) -> bool {
        self.excluded.iter().any(|excluded| excluded == table)
    }

    /// Dump cleaned CREATE statements for `tables`, in the given order.
    ///
    /// Tables without a statement are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Propagates source failures; a missing statement is not an error.
    pub async fn schema_dump(&self, tables: &[String]) -> Result<SchemaDump, DatabaseError> {
        let mut dump = SchemaDump::default();
        for table in tables {
            let statement = self.create_statement(table).await?;
            dump.record(table, statement);
        }
        Ok(dump)
    }

    /// The cleaned CREATE statement for one table, `None` when the database
    /// has none.
    ///
    /// # Errors
    ///
    /// Propagates source failures.
    pub async fn create_statement(&self, table: &str) -> Result<Option<String>, DatabaseError> {
        tracing::debug!(%table, "processing table");
        let statement = self.source.show_create_table(table).await?;
        if statement.is_none() {
            tracing::warn!(%table, "no CREATE TABLE statement found; skipping");
        }
        Ok(statement.map(|sql| clean_create_statement(&sql)))
    }
}
