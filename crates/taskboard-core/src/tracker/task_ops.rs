//! Task operations for the Tracker.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Task, TaskFilter},
    params::{CreateTask, UpdateTask},
};

impl Tracker {
    /// Creates a task and its resource links as one unit.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        let params = params.clone();
        self.with_db(move |db| db.create_task(&params)).await
    }

    /// Retrieves a task by its ID.
    pub async fn get_task(&self, id: u64) -> Result<Option<Task>> {
        self.with_db(move |db| db.get_task(id)).await
    }

    /// Lists tasks matching `filter`.
    pub async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        self.with_db(move |db| db.list_tasks(&filter)).await
    }

    /// Tasks of one project ordered by description.
    ///
    /// Fails with `ProjectNotFound` rather than returning an empty list for
    /// an unknown project.
    pub async fn project_tasks(&self, project_id: u64) -> Result<Vec<Task>> {
        self.with_db(move |db| {
            if db.get_project(project_id)?.is_none() {
                return Err(TrackerError::ProjectNotFound { id: project_id });
            }
            db.list_tasks(&TaskFilter::for_project(project_id))
        })
        .await
    }

    /// Replaces every stored field of a task.
    pub async fn update_task(&self, id: u64, params: &UpdateTask) -> Result<Task> {
        let params = params.clone();
        self.with_db(move |db| db.update_task(id, &params)).await
    }

    /// Starts a task now. Returns the recorded start stamp.
    pub async fn start_task(&self, id: u64) -> Result<Timestamp> {
        self.with_db(move |db| db.start_task(id, Timestamp::now()))
            .await
    }

    /// Completes a task now. Returns the recorded completion stamp.
    pub async fn finish_task(&self, id: u64) -> Result<Timestamp> {
        self.with_db(move |db| db.finish_task(id, Timestamp::now()))
            .await
    }

    /// Deletes a task and its resource links.
    pub async fn delete_task(&self, id: u64) -> Result<()> {
        self.with_db(move |db| db.delete_task(id)).await
    }
}
