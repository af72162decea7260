//! Derived, read-only views assembled per request.

use serde::Serialize;

use super::{CompletionEstimate, JobStatus, Project, Resource, Task, TaskStatus};

/// A task annotated with its display status.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub status: TaskStatus,
}

/// A project with its tasks and projected completion.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<TaskView>,
    pub possible_date: CompletionEstimate,
}

/// An actionable task as listed under a resource on the job board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobTask {
    #[serde(rename = "TaskID")]
    pub task_id: u64,
    #[serde(rename = "ProjectID")]
    pub project_id: u64,
    #[serde(rename = "Description")]
    pub description: String,
    /// Description of the owning project, empty if the project is unknown
    #[serde(rename = "ProjectDescription")]
    pub project_description: String,
    pub status: JobStatus,
}

/// A resource together with the work currently queued on it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobBoardEntry {
    #[serde(flatten)]
    pub resource: Resource,
    pub tasks: Vec<JobTask>,
}
