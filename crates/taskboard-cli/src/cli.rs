//! Terminal commands.

use anyhow::{Context, Result};
use taskboard_core::{JobBoard, OperationStatus, ProjectOverview, Resources, Tracker};

use crate::renderer::TerminalRenderer;

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn list_projects(&self) -> Result<()> {
        let views = self
            .tracker
            .project_overview()
            .await
            .context("Failed to load projects")?;
        self.renderer.render(&ProjectOverview(views).to_string());
        Ok(())
    }

    pub async fn show_jobs(&self) -> Result<()> {
        let board = self
            .tracker
            .job_board()
            .await
            .context("Failed to load job board")?;
        self.renderer.render(&JobBoard(board).to_string());
        Ok(())
    }

    pub async fn list_resources(&self) -> Result<()> {
        let resources = self
            .tracker
            .list_resources()
            .await
            .context("Failed to load resources")?;
        self.renderer.render(&Resources(resources).to_string());
        Ok(())
    }

    /// The schema already exists once the tracker is built; `reset` wipes it
    /// first.
    pub async fn init_db(&self, reset: bool) -> Result<()> {
        if reset {
            self.tracker
                .reset()
                .await
                .context("Failed to reset database")?;
        }

        let status = OperationStatus::success(format!(
            "Database initialized at {}",
            self.tracker.database_path().display()
        ));
        self.renderer.render(&status.to_string());
        Ok(())
    }
}
