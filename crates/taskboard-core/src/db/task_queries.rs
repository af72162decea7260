//! Task CRUD operations and queries.

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, OptionalExtension, Transaction, TransactionBehavior};

use super::utils::{
    row_exists, task_from_row, CHECK_PROJECT_EXISTS_SQL, CHECK_TASK_EXISTS_SQL, TASK_COLUMNS,
};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{CompletionFilter, Task, TaskFilter, TaskOrder},
    params::{CreateTask, UpdateTask},
};

const INSERT_TASK_SQL: &str = "INSERT INTO Tasks (ProjectID, Description, Notes, Duration, DependentTaskID) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_REQUIRED_RESOURCE_SQL: &str =
    "INSERT INTO RequiredResources (TaskID, ResourceID) VALUES (?1, ?2)";
const UPDATE_TASK_SQL: &str = "UPDATE Tasks SET ProjectID = ?1, Description = ?2, Notes = ?3, Duration = ?4, Started = ?5, Completed = ?6, DependentTaskID = ?7 WHERE TaskID = ?8";
const START_TASK_SQL: &str = "UPDATE Tasks SET Started = ?1, Completed = NULL WHERE TaskID = ?2";
const FINISH_TASK_SQL: &str = "UPDATE Tasks SET Completed = ?1 WHERE TaskID = ?2";
const DELETE_TASK_SQL: &str = "DELETE FROM Tasks WHERE TaskID = ?1";

impl super::Database {
    /// Creates a task and links it to its required resources.
    ///
    /// The task row and every link row are written in one transaction. If
    /// any statement fails, nothing is kept and the failing statement's
    /// error is returned. The write lock is taken up front so concurrent
    /// creators wait on the busy timeout instead of failing the lock upgrade.
    pub fn create_task(&mut self, params: &CreateTask) -> Result<Task> {
        params.validate()?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let task = match Self::insert_task_with_links(&tx, params) {
            Ok(task) => task,
            Err(e) => {
                warn!("Rolling back creation of task '{}': {e}", params.description);
                if let Err(rollback_err) = tx.rollback() {
                    warn!("Rollback failed: {rollback_err}");
                }
                return Err(e);
            }
        };

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(task)
    }

    fn insert_task_with_links(tx: &Transaction, params: &CreateTask) -> Result<Task> {
        Self::check_task_references(tx, params.project_id, params.dependent_task_id)?;

        tx.execute(
            INSERT_TASK_SQL,
            params![
                params.project_id as i64,
                params.description,
                params.notes,
                params.duration,
                params.dependent_task_id.map(|id| id as i64),
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        for resource_id in params.unique_resource_ids() {
            tx.execute(
                INSERT_REQUIRED_RESOURCE_SQL,
                params![id as i64, resource_id as i64],
            )
            .db_context(&format!("Failed to link resource {resource_id} to task {id}"))?;
        }

        Ok(Task {
            id,
            project_id: params.project_id,
            description: params.description.clone(),
            notes: params.notes.clone(),
            duration: params.duration,
            started: None,
            completed: None,
            dependent_task_id: params.dependent_task_id,
        })
    }

    /// Rejects writes naming a project or dependency that does not exist.
    fn check_task_references(
        tx: &Transaction,
        project_id: u64,
        dependent_task_id: Option<u64>,
    ) -> Result<()> {
        if !row_exists(tx, CHECK_PROJECT_EXISTS_SQL, project_id)? {
            return Err(TrackerError::invalid_input("ProjectID")
                .with_reason(format!("Project {project_id} does not exist")));
        }

        if let Some(dependency) = dependent_task_id {
            if !row_exists(tx, CHECK_TASK_EXISTS_SQL, dependency)? {
                return Err(TrackerError::invalid_input("DependentTaskID")
                    .with_reason(format!("Task {dependency} does not exist")));
            }
        }

        Ok(())
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM Tasks WHERE TaskID = ?1");
        self.connection
            .query_row(&sql, params![id as i64], task_from_row)
            .optional()
            .db_context("Failed to query task")
    }

    /// Lists tasks matching `filter`.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut query = format!("SELECT {TASK_COLUMNS} FROM Tasks");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(project_id) = filter.project_id {
            conditions.push("ProjectID = ?");
            params_vec.push(Box::new(project_id as i64));
        }

        match filter.completion {
            Some(CompletionFilter::Completed) => conditions.push("Completed IS NOT NULL"),
            Some(CompletionFilter::Uncompleted) => conditions.push("Completed IS NULL"),
            None => {}
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(match filter.order {
            TaskOrder::Id => " ORDER BY TaskID",
            TaskOrder::Description => " ORDER BY Description, TaskID",
        });

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let tasks = stmt
            .query_map(&params_refs[..], task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(tasks)
    }

    /// Replaces every stored field of a task.
    pub fn update_task(&mut self, id: u64, params: &UpdateTask) -> Result<Task> {
        params.validate()?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        if !row_exists(&tx, CHECK_TASK_EXISTS_SQL, id)? {
            return Err(TrackerError::TaskNotFound { id });
        }
        Self::check_task_references(&tx, params.project_id, params.dependent_task_id)?;

        tx.execute(
            UPDATE_TASK_SQL,
            params![
                params.project_id as i64,
                params.description,
                params.notes,
                params.duration,
                params.started.map(|t| t.to_string()),
                params.completed.map(|t| t.to_string()),
                params.dependent_task_id.map(|id| id as i64),
                id as i64,
            ],
        )
        .db_context("Failed to update task")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            project_id: params.project_id,
            description: params.description.clone(),
            notes: params.notes.clone(),
            duration: params.duration,
            started: params.started,
            completed: params.completed,
            dependent_task_id: params.dependent_task_id,
        })
    }

    /// Marks a task as started at `at` and clears any completion stamp.
    pub fn start_task(&mut self, id: u64, at: Timestamp) -> Result<Timestamp> {
        let rows_affected = self
            .connection
            .execute(START_TASK_SQL, params![at.to_string(), id as i64])
            .db_context("Failed to start task")?;

        if rows_affected == 0 {
            return Err(TrackerError::TaskNotFound { id });
        }

        debug!("Task {id} started at {at}");
        Ok(at)
    }

    /// Marks a task as completed at `at`. The start stamp is left as is.
    pub fn finish_task(&mut self, id: u64, at: Timestamp) -> Result<Timestamp> {
        let rows_affected = self
            .connection
            .execute(FINISH_TASK_SQL, params![at.to_string(), id as i64])
            .db_context("Failed to finish task")?;

        if rows_affected == 0 {
            return Err(TrackerError::TaskNotFound { id });
        }

        debug!("Task {id} completed at {at}");
        Ok(at)
    }

    /// Permanently deletes a task and its resource links.
    ///
    /// Tasks that depended on it keep the now dangling reference, which
    /// status resolution treats as satisfied.
    pub fn delete_task(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_TASK_SQL, params![id as i64])
            .db_context("Failed to delete task")?;

        if rows_affected == 0 {
            return Err(TrackerError::TaskNotFound { id });
        }

        Ok(())
    }
}
