//! Project operations for the Tracker.

use super::Tracker;
use crate::{error::Result, models::Project, params::ProjectInput};

impl Tracker {
    /// Creates a new project.
    pub async fn create_project(&self, input: &ProjectInput) -> Result<Project> {
        let input = input.clone();
        self.with_db(move |db| db.create_project(&input)).await
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, id: u64) -> Result<Option<Project>> {
        self.with_db(move |db| db.get_project(id)).await
    }

    /// Lists all projects ordered by description.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.with_db(|db| db.list_projects()).await
    }

    /// Replaces the description, bucket, and notes of a project.
    pub async fn update_project(&self, id: u64, input: &ProjectInput) -> Result<Project> {
        let input = input.clone();
        self.with_db(move |db| db.update_project(id, &input)).await
    }

    /// Deletes a project together with its tasks.
    pub async fn delete_project(&self, id: u64) -> Result<()> {
        self.with_db(move |db| db.delete_project(id)).await
    }
}
