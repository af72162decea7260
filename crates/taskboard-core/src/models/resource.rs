//! Resource and task/resource link models.

use serde::{Deserialize, Serialize};

/// A named capacity or tool that tasks may require.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    #[serde(rename = "ResourceID")]
    pub id: u64,

    /// Unique name of the resource
    #[serde(rename = "Description")]
    pub description: String,
}

/// One row of the many-to-many link between tasks and resources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RequiredResource {
    #[serde(rename = "TaskID")]
    pub task_id: u64,

    #[serde(rename = "ResourceID")]
    pub resource_id: u64,
}
