//! Database schema initialization and reset.

use log::info;

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");
const RESET_SQL: &str = include_str!("../../assets/reset.sql");

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }

    /// Drops every table and recreates an empty schema.
    ///
    /// All projects, tasks, resources, and links are lost.
    pub fn reset(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(RESET_SQL)
            .db_context("Failed to drop existing tables")?;
        tx.execute_batch(SCHEMA_SQL)
            .db_context("Failed to recreate database schema")?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Database schema reset");
        Ok(())
    }
}
