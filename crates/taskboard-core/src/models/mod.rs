//! Data models for projects, tasks, and resources.
//!
//! Stored entities ([`Project`], [`Task`], [`Resource`], [`RequiredResource`])
//! mirror the database rows one to one. Derived views ([`ProjectView`],
//! [`JobBoardEntry`]) are assembled per request by [`crate::board`] and never
//! persisted.
//!
//! Field names serialize in the PascalCase form the browser front end
//! consumes (`ProjectID`, `DependentTaskID`, ...), while the derived fields
//! keep their lowercase names (`tasks`, `status`, `possible_date`).
//!
//! # Examples
//!
//! ```rust
//! use taskboard_core::models::{Task, TaskState};
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: 1,
//!     project_id: 1,
//!     description: "Cut timber".to_string(),
//!     notes: None,
//!     duration: 2,
//!     started: Some(Timestamp::now()),
//!     completed: None,
//!     dependent_task_id: None,
//! };
//! assert_eq!(task.state(), TaskState::Active);
//! ```

pub mod estimate;
pub mod filters;
pub mod project;
pub mod resource;
pub mod status;
pub mod task;
pub mod views;


pub use estimate::CompletionEstimate;
pub use filters::{CompletionFilter, TaskFilter, TaskOrder};
pub use project::Project;
pub use resource::{RequiredResource, Resource};
pub use status::{JobStatus, TaskState, TaskStatus};
pub use task::Task;
pub use views::{JobBoardEntry, JobTask, ProjectView, TaskView};
