//! Project model definition.

use serde::{Deserialize, Serialize};

/// A top-level unit of work grouping tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Unique identifier for the project
    #[serde(rename = "ProjectID")]
    pub id: u64,

    /// Short name of the project
    #[serde(rename = "Description")]
    pub description: String,

    /// Free-text grouping label used to lay projects out in columns
    #[serde(rename = "Bucket")]
    pub bucket: Option<String>,

    /// Free-text notes
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}
