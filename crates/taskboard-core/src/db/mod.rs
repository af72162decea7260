//! Database operations and SQLite management for the board.
//!
//! This module provides low-level database operations for projects, tasks,
//! resources, and the links between tasks and resources. A [`Database`] wraps
//! exactly one connection; callers open one per request and drop it when the
//! request ends.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod project_queries;
pub mod resource_queries;
pub mod schedule_queries;
pub mod schema;
pub mod task_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
