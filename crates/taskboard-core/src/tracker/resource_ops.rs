//! Resource and link operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{RequiredResource, Resource},
    params::CreateResource,
};

impl Tracker {
    /// Creates a resource; fails with `ResourceExists` on a duplicate name.
    pub async fn create_resource(&self, params: &CreateResource) -> Result<Resource> {
        let params = params.clone();
        self.with_db(move |db| db.create_resource(&params)).await
    }

    /// Lists all resources ordered by description.
    pub async fn list_resources(&self) -> Result<Vec<Resource>> {
        self.with_db(|db| db.list_resources()).await
    }

    pub async fn delete_resource(&self, id: u64) -> Result<()> {
        self.with_db(move |db| db.delete_resource(id)).await
    }

    /// Resources a task requires. Fails with `TaskNotFound` for unknown tasks.
    pub async fn task_resources(&self, task_id: u64) -> Result<Vec<Resource>> {
        self.with_db(move |db| {
            if db.get_task(task_id)?.is_none() {
                return Err(TrackerError::TaskNotFound { id: task_id });
            }
            db.task_resources(task_id)
        })
        .await
    }

    pub async fn link_resource(&self, task_id: u64, resource_id: u64) -> Result<RequiredResource> {
        self.with_db(move |db| db.link_resource(task_id, resource_id))
            .await
    }

    /// Removes a link if present. Returns whether anything was removed.
    pub async fn unlink_resource(&self, task_id: u64, resource_id: u64) -> Result<bool> {
        self.with_db(move |db| db.unlink_resource(task_id, resource_id))
            .await
    }
}
