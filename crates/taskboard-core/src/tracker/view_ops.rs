//! Derived views: the project overview and the job board.
//!
//! Each view reads everything it needs through a single handle and uses a
//! single `now`, so all projects in one response share the same baseline.

use jiff::Zoned;
use log::debug;

use super::Tracker;
use crate::{
    board::{assemble_job_board, assemble_projects},
    error::Result,
    models::{JobBoardEntry, ProjectView, TaskFilter},
};

impl Tracker {
    /// All projects with their tasks, task statuses, and possible
    /// completion dates.
    pub async fn project_overview(&self) -> Result<Vec<ProjectView>> {
        self.with_db(|db| {
            let now = Zoned::now();
            let projects = db.list_projects()?;
            let tasks = db.list_tasks(&TaskFilter::default())?;
            debug!(
                "Assembling overview of {} projects and {} tasks",
                projects.len(),
                tasks.len()
            );
            assemble_projects(projects, tasks, &*db, &now)
        })
        .await
    }

    /// Every resource with the actionable tasks queued on it.
    pub async fn job_board(&self) -> Result<Vec<JobBoardEntry>> {
        self.with_db(|db| {
            let resources = db.list_resources()?;
            let tasks = db.list_tasks(&TaskFilter::uncompleted())?;
            let links = db.list_required_resources()?;
            let projects = db.list_projects()?;
            Ok(assemble_job_board(resources, &tasks, &links, &projects))
        })
        .await
    }
}
