//! Async service facade over the board.
//!
//! [`Tracker`] is what the REST server and the CLI talk to. It holds only the
//! database path: every operation opens its own [`Database`] on a blocking
//! thread, does its work, and drops the handle before returning. Nothing is
//! shared between calls, so concurrent requests only meet inside SQLite.
//!
//! ```text
//! HTTP handler / CLI command
//!         │
//!         ▼
//!   Tracker::op().await ──spawn_blocking──▶ Database::new(path) ──▶ queries
//!                                                 │
//!                                                 ▼
//!                                      board::{assemble_*, estimate_for}
//! ```
//!
//! ```rust,no_run
//! use taskboard_core::{params::ProjectInput, TrackerBuilder};
//!
//! # async fn example() -> taskboard_core::Result<()> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/taskboard.db"))
//!     .build()
//!     .await?;
//!
//! tracker
//!     .create_project(&ProjectInput {
//!         description: "Kitchen".to_string(),
//!         bucket: Some("House".to_string()),
//!         notes: None,
//!     })
//!     .await?;
//!
//! for view in tracker.project_overview().await? {
//!     println!("{}: {}", view.project.description, view.possible_date);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{ConfigResultExt, Result},
};

pub mod builder;
pub mod project_ops;
pub mod resource_ops;
pub mod task_ops;
pub mod view_ops;


pub use builder::TrackerBuilder;

/// Main entry point for reading and changing the board.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite file backing this tracker.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Drops all data and recreates an empty schema.
    pub async fn reset(&self) -> Result<()> {
        self.with_db(|db| db.reset()).await
    }

    /// Runs `op` against a freshly opened handle on a blocking thread.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .config_context("Task join error")?
    }
}
