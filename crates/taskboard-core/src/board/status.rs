//! Display status resolution for single tasks.

use super::TaskLookup;
use crate::models::{JobStatus, Task, TaskState, TaskStatus};

/// Resolves the project-view status of `task` against `lookup`.
///
/// Rules are checked in order and the first match wins:
///
/// 1. a completion stamp means [`TaskStatus::Completed`];
/// 2. a start stamp means [`TaskStatus::Active`];
/// 3. a dependency that is present in `lookup` and not completed means
///    [`TaskStatus::Dependent`];
/// 4. anything else is [`TaskStatus::AwaitingResource`].
///
/// A dependency missing from `lookup` counts as satisfied. Only one hop is
/// followed, so self references and cycles resolve without traversal.
pub fn resolve_status(task: &Task, lookup: &TaskLookup<'_>) -> TaskStatus {
    match task.state() {
        TaskState::Completed => TaskStatus::Completed,
        TaskState::Active => TaskStatus::Active,
        TaskState::Pending if is_blocked(task, lookup) => TaskStatus::Dependent,
        TaskState::Pending => TaskStatus::AwaitingResource,
    }
}

/// Resolves the job-board label of `task`.
///
/// `uncompleted` must index only tasks without a completion stamp. Returns
/// `None` when the task's dependency is still in that set, meaning the task
/// is not actionable and must be left off the board.
pub fn resolve_job_status(task: &Task, uncompleted: &TaskLookup<'_>) -> Option<JobStatus> {
    if task
        .dependent_task_id
        .is_some_and(|id| uncompleted.contains(id))
    {
        return None;
    }

    Some(if task.started.is_some() {
        JobStatus::Active
    } else {
        JobStatus::Waiting
    })
}

fn is_blocked(task: &Task, lookup: &TaskLookup<'_>) -> bool {
    task.dependent_task_id
        .and_then(|id| lookup.get(id))
        .is_some_and(|dependency| dependency.completed.is_none())
}
