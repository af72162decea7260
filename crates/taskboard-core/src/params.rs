//! Parameter structures for board operations.
//!
//! These structures are shared by every interface (REST API, CLI) and are
//! deliberately free of framework-specific derives beyond serde. Their serde
//! field names match the JSON the browser front end sends, so the REST layer
//! can deserialize request bodies straight into them.
//!
//! Each parameter type validates itself; the database layer calls
//! `validate()` before touching storage so every entry point gets the same
//! checks.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Longest accepted task duration, in days.
pub const MAX_DURATION_DAYS: i64 = 36_500;

fn default_duration() -> i64 {
    1
}

fn require_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TrackerError::invalid_input("Description").with_reason("must not be empty"));
    }
    Ok(())
}

fn require_duration(duration: i64) -> Result<()> {
    if !(0..=MAX_DURATION_DAYS).contains(&duration) {
        return Err(TrackerError::invalid_input("Duration").with_reason(format!(
            "must be between 0 and {MAX_DURATION_DAYS} days, got {duration}"
        )));
    }
    Ok(())
}

/// Fields of a project, used both to create and to replace one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInput {
    /// Short name of the project (required)
    #[serde(rename = "Description")]
    pub description: String,
    /// Optional grouping label
    #[serde(rename = "Bucket")]
    pub bucket: Option<String>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

impl ProjectInput {
    pub fn validate(&self) -> Result<()> {
        require_description(&self.description)
    }
}

/// Parameters for creating a task together with its resource links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Owning project (must exist)
    #[serde(rename = "ProjectID")]
    pub project_id: u64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
    /// Estimated duration in whole days, 1 when omitted
    #[serde(rename = "Duration", default = "default_duration")]
    pub duration: i64,
    /// Task this one waits on (must exist)
    #[serde(rename = "DependentTaskID")]
    pub dependent_task_id: Option<u64>,
    /// Resources the new task requires; duplicates are ignored
    #[serde(rename = "ResourceIDs", default)]
    pub resource_ids: Vec<u64>,
}

impl CreateTask {
    pub fn validate(&self) -> Result<()> {
        require_description(&self.description)?;
        require_duration(self.duration)
    }

    /// The requested resource ids, sorted and without duplicates.
    pub fn unique_resource_ids(&self) -> Vec<u64> {
        let mut ids = self.resource_ids.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

impl Default for CreateTask {
    fn default() -> Self {
        Self {
            project_id: 0,
            description: String::new(),
            notes: None,
            duration: default_duration(),
            dependent_task_id: None,
            resource_ids: Vec::new(),
        }
    }
}

/// Full replacement of a task's stored fields.
///
/// Omitted optional fields are cleared, matching a PUT of the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(rename = "ProjectID")]
    pub project_id: u64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
    #[serde(rename = "Duration", default = "default_duration")]
    pub duration: i64,
    #[serde(rename = "Started")]
    pub started: Option<Timestamp>,
    #[serde(rename = "Completed")]
    pub completed: Option<Timestamp>,
    #[serde(rename = "DependentTaskID")]
    pub dependent_task_id: Option<u64>,
}

impl UpdateTask {
    pub fn validate(&self) -> Result<()> {
        require_description(&self.description)?;
        require_duration(self.duration)
    }
}

impl Default for UpdateTask {
    fn default() -> Self {
        Self {
            project_id: 0,
            description: String::new(),
            notes: None,
            duration: default_duration(),
            started: None,
            completed: None,
            dependent_task_id: None,
        }
    }
}

/// Parameters for creating a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateResource {
    /// Unique name of the resource
    #[serde(rename = "Description")]
    pub description: String,
}

impl CreateResource {
    pub fn validate(&self) -> Result<()> {
        require_description(&self.description)
    }
}

/// Parameters for attaching a resource to an existing task.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LinkResource {
    #[serde(rename = "ResourceID")]
    pub resource_id: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_task_defaults() {
        let params: CreateTask = serde_json::from_value(json!({
            "ProjectID": 4,
            "Description": "Sand deck",
        }))
        .unwrap();

        assert_eq!(params.project_id, 4);
        assert_eq!(params.duration, 1);
        assert!(params.notes.is_none());
        assert!(params.dependent_task_id.is_none());
        assert!(params.resource_ids.is_empty());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_create_task_resource_ids_deduplicated() {
        let params: CreateTask = serde_json::from_value(json!({
            "ProjectID": 1,
            "Description": "Sand deck",
            "Duration": 2,
            "ResourceIDs": [3, 1, 3, 2],
        }))
        .unwrap();

        assert_eq!(params.unique_resource_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_description_rejected() {
        let params = ProjectInput {
            description: "   ".to_string(),
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "Description"));
    }

    #[test]
    fn test_duration_bounds() {
        let mut params = CreateTask {
            project_id: 1,
            description: "Paint".to_string(),
            ..Default::default()
        };

        params.duration = 0;
        assert!(params.validate().is_ok());

        params.duration = -1;
        assert!(params.validate().is_err());

        params.duration = MAX_DURATION_DAYS + 1;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_update_task_reads_timestamps() {
        let params: UpdateTask = serde_json::from_value(json!({
            "ProjectID": 1,
            "Description": "Paint",
            "Notes": "",
            "Duration": 3,
            "Started": "2024-03-01T08:00:00Z",
            "Completed": null,
            "DependentTaskID": null,
        }))
        .unwrap();

        assert!(params.started.is_some());
        assert!(params.completed.is_none());
        assert!(params.validate().is_ok());
    }
}
