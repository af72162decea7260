//! Collection wrapper types for displaying groups of domain objects.

use std::{collections::BTreeMap, fmt};

use crate::models::{JobBoardEntry, ProjectView, Resource};

/// Heading used for projects without a bucket.
pub const DEFAULT_BUCKET: &str = "Uncategorized";

/// Newtype wrapper for displaying the project overview, grouped by bucket.
///
/// Buckets are listed alphabetically; projects keep their order within a
/// bucket.
///
/// ```rust
/// use taskboard_core::{
///     display::ProjectOverview,
///     models::{CompletionEstimate, Project, ProjectView},
/// };
///
/// let view = ProjectView {
///     project: Project {
///         id: 1,
///         description: "Kitchen".to_string(),
///         bucket: None,
///         notes: None,
///     },
///     tasks: vec![],
///     possible_date: CompletionEstimate::AllCompleted,
/// };
/// let output = ProjectOverview(vec![view]).to_string();
/// assert!(output.contains("# Uncategorized"));
/// assert!(output.contains("## Kitchen (ID: 1)"));
/// ```
pub struct ProjectOverview(pub Vec<ProjectView>);

impl ProjectOverview {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Projects grouped under their bucket heading.
    pub fn by_bucket(&self) -> BTreeMap<&str, Vec<&ProjectView>> {
        let mut buckets: BTreeMap<&str, Vec<&ProjectView>> = BTreeMap::new();
        for view in &self.0 {
            let bucket = view
                .project
                .bucket
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .unwrap_or(DEFAULT_BUCKET);
            buckets.entry(bucket).or_default().push(view);
        }
        buckets
    }
}

impl fmt::Display for ProjectOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }

        for (bucket, views) in self.by_bucket() {
            writeln!(f, "# {bucket}")?;
            writeln!(f)?;
            for view in views {
                write!(f, "{view}")?;
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the job board.
pub struct JobBoard(pub Vec<JobBoardEntry>);

impl JobBoard {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tasks listed across all resources.
    pub fn job_count(&self) -> usize {
        self.0.iter().map(|entry| entry.tasks.len()).sum()
    }
}

impl fmt::Display for JobBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No resources found.");
        }
        for entry in &self.0 {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of resources.
pub struct Resources(pub Vec<Resource>);

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No resources found.");
        }
        for resource in &self.0 {
            write!(f, "{resource}")?;
        }
        Ok(())
    }
}
