//! Resource CRUD and task/resource link operations.

use rusqlite::{params, Row};

use super::utils::{row_exists, CHECK_RESOURCE_EXISTS_SQL, CHECK_TASK_EXISTS_SQL};
use crate::{
    error::{is_unique_violation, DatabaseResultExt, Result, TrackerError},
    models::{RequiredResource, Resource},
    params::CreateResource,
};

const INSERT_RESOURCE_SQL: &str = "INSERT INTO Resources (Description) VALUES (?1)";
const SELECT_RESOURCES_SQL: &str =
    "SELECT ResourceID, Description FROM Resources ORDER BY Description";
const DELETE_RESOURCE_SQL: &str = "DELETE FROM Resources WHERE ResourceID = ?1";
const SELECT_TASK_RESOURCES_SQL: &str = r#"
    SELECT r.ResourceID, r.Description
    FROM Resources r
    JOIN RequiredResources rr ON rr.ResourceID = r.ResourceID
    WHERE rr.TaskID = ?1
    ORDER BY r.Description
"#;
const INSERT_LINK_SQL: &str = "INSERT INTO RequiredResources (TaskID, ResourceID) VALUES (?1, ?2)";
const DELETE_LINK_SQL: &str =
    "DELETE FROM RequiredResources WHERE TaskID = ?1 AND ResourceID = ?2";
const SELECT_LINKS_SQL: &str =
    "SELECT TaskID, ResourceID FROM RequiredResources ORDER BY ResourceID, TaskID";

impl super::Database {
    fn resource_from_row(row: &Row) -> rusqlite::Result<Resource> {
        Ok(Resource {
            id: row.get::<_, i64>(0)? as u64,
            description: row.get(1)?,
        })
    }

    /// Creates a resource. Descriptions are unique.
    pub fn create_resource(&mut self, params: &CreateResource) -> Result<Resource> {
        params.validate()?;

        match self
            .connection
            .execute(INSERT_RESOURCE_SQL, params![params.description])
        {
            Ok(_) => Ok(Resource {
                id: self.connection.last_insert_rowid() as u64,
                description: params.description.clone(),
            }),
            Err(e) if is_unique_violation(&e) => Err(TrackerError::ResourceExists {
                description: params.description.clone(),
            }),
            Err(e) => Err(TrackerError::database("Failed to insert resource").with_source(e)),
        }
    }

    /// Lists all resources ordered by description.
    pub fn list_resources(&self) -> Result<Vec<Resource>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RESOURCES_SQL)
            .db_context("Failed to prepare query")?;

        let resources = stmt
            .query_map([], Self::resource_from_row)
            .db_context("Failed to query resources")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch resources")?;

        Ok(resources)
    }

    /// Deletes a resource and every link that references it.
    pub fn delete_resource(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_RESOURCE_SQL, params![id as i64])
            .db_context("Failed to delete resource")?;

        if rows_affected == 0 {
            return Err(TrackerError::ResourceNotFound { id });
        }

        Ok(())
    }

    /// Resources required by a task. Empty for unknown tasks.
    pub fn task_resources(&self, task_id: u64) -> Result<Vec<Resource>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASK_RESOURCES_SQL)
            .db_context("Failed to prepare query")?;

        let resources = stmt
            .query_map(params![task_id as i64], Self::resource_from_row)
            .db_context("Failed to query task resources")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch task resources")?;

        Ok(resources)
    }

    /// Records that a task requires a resource.
    pub fn link_resource(&mut self, task_id: u64, resource_id: u64) -> Result<RequiredResource> {
        if !row_exists(&self.connection, CHECK_TASK_EXISTS_SQL, task_id)? {
            return Err(TrackerError::TaskNotFound { id: task_id });
        }
        if !row_exists(&self.connection, CHECK_RESOURCE_EXISTS_SQL, resource_id)? {
            return Err(TrackerError::ResourceNotFound { id: resource_id });
        }

        match self
            .connection
            .execute(INSERT_LINK_SQL, params![task_id as i64, resource_id as i64])
        {
            Ok(_) => Ok(RequiredResource {
                task_id,
                resource_id,
            }),
            Err(e) if is_unique_violation(&e) => Err(TrackerError::DuplicateLink {
                task_id,
                resource_id,
            }),
            Err(e) => Err(TrackerError::database("Failed to link resource").with_source(e)),
        }
    }

    /// Removes a task/resource link. Returns false when there was none.
    pub fn unlink_resource(&mut self, task_id: u64, resource_id: u64) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_LINK_SQL, params![task_id as i64, resource_id as i64])
            .db_context("Failed to unlink resource")?;

        Ok(rows_affected > 0)
    }

    /// Every task/resource link.
    pub fn list_required_resources(&self) -> Result<Vec<RequiredResource>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LINKS_SQL)
            .db_context("Failed to prepare query")?;

        let links = stmt
            .query_map([], |row| {
                Ok(RequiredResource {
                    task_id: row.get::<_, i64>(0)? as u64,
                    resource_id: row.get::<_, i64>(1)? as u64,
                })
            })
            .db_context("Failed to query resource links")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch resource links")?;

        Ok(links)
    }
}
