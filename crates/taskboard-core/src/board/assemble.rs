//! Assembly of the project overview and the job board from loaded rows.

use std::collections::HashMap;

use jiff::Zoned;

use super::{estimate_for, resolve_job_status, resolve_status, ScheduleSource, TaskLookup};
use crate::{
    error::Result,
    models::{
        JobBoardEntry, JobTask, Project, ProjectView, RequiredResource, Resource, Task, TaskView,
    },
};

/// Builds one [`ProjectView`] per project.
///
/// Statuses are resolved against a lookup over all of `tasks`; each
/// project's completion estimate is read through `source` with the shared
/// `now`. Tasks keep the order they were loaded in.
pub fn assemble_projects<S>(
    projects: Vec<Project>,
    tasks: Vec<Task>,
    source: &S,
    now: &Zoned,
) -> Result<Vec<ProjectView>>
where
    S: ScheduleSource + ?Sized,
{
    let statuses: Vec<_> = {
        let lookup = TaskLookup::new(&tasks);
        tasks
            .iter()
            .map(|task| resolve_status(task, &lookup))
            .collect()
    };

    let mut by_project: HashMap<u64, Vec<TaskView>> = HashMap::new();
    for (task, status) in tasks.into_iter().zip(statuses) {
        by_project
            .entry(task.project_id)
            .or_default()
            .push(TaskView { task, status });
    }

    projects
        .into_iter()
        .map(|project| {
            let possible_date = estimate_for(source, project.id, now)?;
            let tasks = by_project.remove(&project.id).unwrap_or_default();
            Ok(ProjectView {
                project,
                tasks,
                possible_date,
            })
        })
        .collect()
}

/// Builds the job board: for every resource, the actionable tasks that
/// require it.
///
/// Completed tasks in `tasks` are ignored. A task whose dependency is still
/// uncompleted is left off every resource. Links naming unknown or
/// completed tasks are skipped.
pub fn assemble_job_board(
    resources: Vec<Resource>,
    tasks: &[Task],
    links: &[RequiredResource],
    projects: &[Project],
) -> Vec<JobBoardEntry> {
    let uncompleted: TaskLookup<'_> = tasks.iter().filter(|t| !t.is_completed()).collect();
    let project_names: HashMap<u64, &str> = projects
        .iter()
        .map(|p| (p.id, p.description.as_str()))
        .collect();

    let mut task_ids_by_resource: HashMap<u64, Vec<u64>> = HashMap::new();
    for link in links {
        task_ids_by_resource
            .entry(link.resource_id)
            .or_default()
            .push(link.task_id);
    }

    resources
        .into_iter()
        .map(|resource| {
            let mut task_ids = task_ids_by_resource.remove(&resource.id).unwrap_or_default();
            task_ids.sort_unstable();
            task_ids.dedup();

            let tasks = task_ids
                .into_iter()
                .filter_map(|id| uncompleted.get(id))
                .filter_map(|task| {
                    let status = resolve_job_status(task, &uncompleted)?;
                    Some(JobTask {
                        task_id: task.id,
                        project_id: task.project_id,
                        description: task.description.clone(),
                        project_description: project_names
                            .get(&task.project_id)
                            .map(|name| name.to_string())
                            .unwrap_or_default(),
                        status,
                    })
                })
                .collect();

            JobBoardEntry { resource, tasks }
        })
        .collect()
}
