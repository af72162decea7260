//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{ConfigResultExt, Result, TrackerError},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/taskboard/taskboard.db` or
    /// `~/.local/share/taskboard/taskboard.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the tracker, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the parent directory cannot be
    /// created, `TrackerError::XdgDirectory` if no default location can be
    /// determined, and `TrackerError::Database` if the schema cannot be
    /// applied.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .config_context("Task join error")??;

        debug!("Using database at {}", db_path.display());
        Ok(Tracker::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("taskboard")
            .place_data_file("taskboard.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
