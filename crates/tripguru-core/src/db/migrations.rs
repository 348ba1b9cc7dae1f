//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 2;

/// Columns added after the first release, with their definitions.
const ADDED_COLUMNS: &[(&str, &str)] = &[
    ("participants", "ALTER TABLE trips ADD COLUMN participants INTEGER"),
    (
        "create_date",
        "ALTER TABLE trips ADD COLUMN create_date INTEGER NOT NULL DEFAULT 0",
    ),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Current value of `PRAGMA user_version`.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        if self.schema_version()? >= SCHEMA_VERSION {
            return Ok(());
        }

        for (column, sql) in ADDED_COLUMNS {
            if !self.has_column(column)? {
                debug!("Adding column {column} to trips table");
                self.connection
                    .execute(sql, [])
                    .db_context("Failed to add column to trips table")?;
            }
        }

        self.connection
            .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
            .db_context("Failed to record schema version")
    }

    fn has_column(&self, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('trips') WHERE name = ?1",
                [column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect trips table")
    }
}
