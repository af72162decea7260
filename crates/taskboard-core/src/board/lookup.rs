//! Per-request index of tasks by identifier.

use std::collections::HashMap;

use crate::models::Task;

/// Borrowed map from task id to task, built once per request.
///
/// The lookup only knows the tasks it was built from. Callers choose the
/// working set: every task for the project view, only uncompleted tasks for
/// the job board.
#[derive(Debug, Default)]
pub struct TaskLookup<'a> {
    by_id: HashMap<u64, &'a Task>,
}

impl<'a> TaskLookup<'a> {
    pub fn new(tasks: &'a [Task]) -> Self {
        tasks.iter().collect()
    }

    pub fn get(&self, id: u64) -> Option<&'a Task> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<'a> FromIterator<&'a Task> for TaskLookup<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Task>>(iter: I) -> Self {
        Self {
            by_id: iter.into_iter().map(|task| (task.id, task)).collect(),
        }
    }
}
