//! Status enumerations for tasks.

use serde::{Deserialize, Serialize};

/// Stored lifecycle state of a task, read straight off its timestamps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Neither started nor completed
    Pending,
    /// Started but not completed
    Active,
    /// Completed (whether or not a start was recorded)
    Completed,
}

/// Display status of a task in the project view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Active,
    /// Blocked by a visible, uncompleted dependency
    Dependent,
    /// Ready to run once its resources are free
    #[serde(rename = "Awaiting resource")]
    AwaitingResource,
}

impl TaskStatus {
    /// Label shown to users and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::Active => "Active",
            TaskStatus::Dependent => "Dependent",
            TaskStatus::AwaitingResource => "Awaiting resource",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskboard_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TaskStatus::AwaitingResource.with_icon(), "○ Awaiting resource");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Active => "➤ Active",
            TaskStatus::Dependent => "⧗ Dependent",
            TaskStatus::AwaitingResource => "○ Awaiting resource",
        }
    }
}

/// Label of a task on the job board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobStatus {
    Active,
    Waiting,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Waiting => "Waiting",
        }
    }
}
