//! Filter types for querying tasks.

/// Restricts a task listing by lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFilter {
    /// Only tasks with a completion stamp
    Completed,
    /// Only tasks without a completion stamp (active and pending)
    Uncompleted,
}

/// Sort order of a task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskOrder {
    #[default]
    Id,
    Description,
}

/// Filter options for querying tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only tasks owned by this project
    pub project_id: Option<u64>,

    /// Only tasks in this completion state
    pub completion: Option<CompletionFilter>,

    pub order: TaskOrder,
}

impl TaskFilter {
    /// Tasks of one project sorted by description, as the project editor
    /// lists them.
    ///
    /// ```rust
    /// use taskboard_core::models::{TaskFilter, TaskOrder};
    ///
    /// let filter = TaskFilter::for_project(7);
    /// assert_eq!(filter.project_id, Some(7));
    /// assert_eq!(filter.order, TaskOrder::Description);
    /// assert!(filter.completion.is_none());
    /// ```
    pub fn for_project(project_id: u64) -> Self {
        Self {
            project_id: Some(project_id),
            completion: None,
            order: TaskOrder::Description,
        }
    }

    /// Every task that still has work left.
    pub fn uncompleted() -> Self {
        Self {
            completion: Some(CompletionFilter::Uncompleted),
            ..Default::default()
        }
    }
}
