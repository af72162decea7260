//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can hand it to the terminal
//! skin unchanged.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    JobBoardEntry, JobStatus, JobTask, Project, ProjectView, Resource, Task, TaskStatus, TaskView,
};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn plural_days(days: i64) -> &'static str {
    if days == 1 {
        "day"
    } else {
        "days"
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.description, self.id)?;
        writeln!(f)?;

        if let Some(bucket) = &self.bucket {
            writeln!(f, "- **Bucket**: {bucket}")?;
        }
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            writeln!(f, "- **Notes**: {notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({} {})",
            self.id,
            self.description,
            self.duration,
            plural_days(self.duration)
        )?;
        writeln!(f)?;

        if let Some(started) = &self.started {
            writeln!(f, "- Started: {}", LocalDateTime(started))?;
        }
        if let Some(completed) = &self.completed {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }
        if let Some(dependency) = self.dependent_task_id {
            writeln!(f, "- Depends on: task {dependency}")?;
        }
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.task;
        write!(
            f,
            "- {}. {} ({} {}, {})",
            task.id,
            task.description,
            task.duration,
            plural_days(task.duration),
            self.status.with_icon()
        )?;
        if let Some(dependency) = task.dependent_task_id {
            write!(f, " after task {dependency}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProjectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.project)?;
        writeln!(f, "- **{}**", self.possible_date)?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(f, "No tasks in this project.")?;
        } else {
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} (ID: {})", self.description, self.id)
    }
}

impl fmt::Display for JobTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}. {}", self.task_id, self.description)?;
        if !self.project_description.is_empty() {
            write!(f, " *{}*", self.project_description)?;
        }
        writeln!(f, " ({})", self.status)
    }
}

impl fmt::Display for JobBoardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.resource.description, self.resource.id)?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(f, "No available jobs for this resource.")?;
        } else {
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }
        writeln!(f)
    }
}
