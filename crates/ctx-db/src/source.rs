//! The introspection seam between the catalog and a live database.

use crate::error::DatabaseError;

/// Read-only schema access the table catalog needs from a database.
///
/// Implementations are passed explicitly to [`crate::TableCatalog`], so tests
/// can substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait SchemaSource {
    /// All table names, in the order the database reports them.
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError>;

    /// The CREATE statement for `table`, or `None` when the database has none.
    async fn show_create_table(&self, table: &str) -> Result<Option<String>, DatabaseError>;
}
