/*
[INPUT]:  Task operations requested by a synchronizer
[OUTPUT]: Task service results behind an object-safe async trait
[POS]:    API seam - abstraction over the remote task service
[UPDATE]: When the set of remote task operations changes
*/

use async_trait::async_trait;

use crate::http::{Result, TasksClient};
use crate::types::{CreateTaskRequest, Task, TaskId};

/// Remote task service operations
///
/// `TasksClient` is the HTTP implementation. The trait is async and object
/// safe so callers can hold an `Arc<dyn TaskApi>`.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full task list in server order
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Create a task with the given title
    async fn create_task(&self, title: &str) -> Result<Task>;

    /// Toggle a task and return the updated entity
    async fn toggle_task(&self, id: TaskId) -> Result<Task>;

    /// Delete a task
    async fn delete_task(&self, id: TaskId) -> Result<()>;
}

#[async_trait]
impl TaskApi for TasksClient {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        TasksClient::list_tasks(self).await
    }

    async fn create_task(&self, title: &str) -> Result<Task> {
        TasksClient::create_task(self, &CreateTaskRequest::new(title)).await
    }

    async fn toggle_task(&self, id: TaskId) -> Result<Task> {
        TasksClient::toggle_task(self, id).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        TasksClient::delete_task(self, id).await
    }
}
