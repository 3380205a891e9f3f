/*
[INPUT]:  Task identifiers and create requests
[OUTPUT]: Task entities returned by the service
[POS]:    HTTP layer - task collection endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use crate::http::{Result, TasksClient};
use crate::types::{CreateTaskRequest, Task, TaskId};
use reqwest::Method;

impl TasksClient {
    /// List every task in server order
    ///
    /// GET tasks/
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "tasks/")?;
        self.send_json(builder).await
    }

    /// Fetch a single task
    ///
    /// GET tasks/{id}
    pub async fn get_task(&self, id: TaskId) -> Result<Task> {
        let endpoint = format!("tasks/{}", id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Create a task; the service assigns `id` and `done`
    ///
    /// POST tasks/
    pub async fn create_task(&self, req: &CreateTaskRequest) -> Result<Task> {
        let builder = self.request(Method::POST, "tasks/")?.json(req);
        self.send_json(builder).await
    }

    /// Flip the done flag of a task
    ///
    /// POST tasks/{id}/toggle
    pub async fn toggle_task(&self, id: TaskId) -> Result<Task> {
        let endpoint = format!("tasks/{}/toggle", id);
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_json(builder).await
    }

    /// Delete a task
    ///
    /// DELETE tasks/{id}
    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        let endpoint = format!("tasks/{}", id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_empty(builder).await
    }
}
