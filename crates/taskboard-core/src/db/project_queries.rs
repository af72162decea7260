//! Project CRUD operations and queries.

use rusqlite::{params, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::Project,
    params::ProjectInput,
};

const INSERT_PROJECT_SQL: &str =
    "INSERT INTO Project (Description, Bucket, Notes) VALUES (?1, ?2, ?3)";
const SELECT_PROJECT_SQL: &str =
    "SELECT ProjectID, Description, Bucket, Notes FROM Project WHERE ProjectID = ?1";
const SELECT_PROJECTS_SQL: &str =
    "SELECT ProjectID, Description, Bucket, Notes FROM Project ORDER BY Description";
const UPDATE_PROJECT_SQL: &str =
    "UPDATE Project SET Description = ?1, Bucket = ?2, Notes = ?3 WHERE ProjectID = ?4";
const DELETE_PROJECT_SQL: &str = "DELETE FROM Project WHERE ProjectID = ?1";

impl super::Database {
    fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
        Ok(Project {
            id: row.get::<_, i64>(0)? as u64,
            description: row.get(1)?,
            bucket: row.get(2)?,
            notes: row.get(3)?,
        })
    }

    /// Creates a new project.
    pub fn create_project(&mut self, input: &ProjectInput) -> Result<Project> {
        input.validate()?;

        self.connection
            .execute(
                INSERT_PROJECT_SQL,
                params![input.description, input.bucket, input.notes],
            )
            .db_context("Failed to insert project")?;

        Ok(Project {
            id: self.connection.last_insert_rowid() as u64,
            description: input.description.clone(),
            bucket: input.bucket.clone(),
            notes: input.notes.clone(),
        })
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        self.connection
            .query_row(SELECT_PROJECT_SQL, params![id as i64], Self::project_from_row)
            .optional()
            .db_context("Failed to query project")
    }

    /// Lists all projects ordered by description.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROJECTS_SQL)
            .db_context("Failed to prepare query")?;

        let projects = stmt
            .query_map([], Self::project_from_row)
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch projects")?;

        Ok(projects)
    }

    /// Replaces the description, bucket, and notes of a project.
    pub fn update_project(&mut self, id: u64, input: &ProjectInput) -> Result<Project> {
        input.validate()?;

        let rows_affected = self
            .connection
            .execute(
                UPDATE_PROJECT_SQL,
                params![input.description, input.bucket, input.notes, id as i64],
            )
            .db_context("Failed to update project")?;

        if rows_affected == 0 {
            return Err(TrackerError::ProjectNotFound { id });
        }

        Ok(Project {
            id,
            description: input.description.clone(),
            bucket: input.bucket.clone(),
            notes: input.notes.clone(),
        })
    }

    /// Permanently deletes a project. Its tasks, and their resource links,
    /// are removed by the foreign key cascade.
    pub fn delete_project(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_PROJECT_SQL, params![id as i64])
            .db_context("Failed to delete project")?;

        if rows_affected == 0 {
            return Err(TrackerError::ProjectNotFound { id });
        }

        Ok(())
    }
}
