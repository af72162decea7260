//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TaskState;

/// Represents a unit of work within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task
    #[serde(rename = "TaskID")]
    pub id: u64,

    /// ID of the owning project
    #[serde(rename = "ProjectID")]
    pub project_id: u64,

    /// Brief summary of the task
    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Notes")]
    pub notes: Option<String>,

    /// Estimated length of the task in whole days
    #[serde(rename = "Duration")]
    pub duration: i64,

    /// When work on the task began
    #[serde(rename = "Started")]
    pub started: Option<Timestamp>,

    /// When the task was finished
    #[serde(rename = "Completed")]
    pub completed: Option<Timestamp>,

    /// The single task this one waits on, if any
    #[serde(rename = "DependentTaskID")]
    pub dependent_task_id: Option<u64>,
}

impl Task {
    /// Lifecycle state derived from the started/completed stamps.
    pub fn state(&self) -> TaskState {
        match (self.started, self.completed) {
            (_, Some(_)) => TaskState::Completed,
            (Some(_), None) => TaskState::Active,
            (None, None) => TaskState::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }
}
