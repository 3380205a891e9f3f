/*
[INPUT]:  Mock task service requirements
[OUTPUT]: Shared fixtures for synchronizer tests
[POS]:    Test infrastructure - shared across sync test modules
[UPDATE]: When adding new test patterns or fixtures
*/

use minitasks_adapter::{ClientConfig, Task, TaskId, TasksClient};
use minitasks_sync::TaskSync;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Synchronizer talking to the mock server under the `/api/v1` prefix
pub fn sync_for(server: &MockServer) -> TaskSync {
    let client = TasksClient::with_config_and_base_url(
        ClientConfig::default(),
        &format!("{}/api/v1", server.uri()),
    )
    .expect("client init");
    TaskSync::new(Arc::new(client))
}

pub fn task(id: i64, title: &str, done: bool) -> Task {
    Task {
        id: TaskId(id),
        title: title.to_string(),
        done,
    }
}

pub fn task_json(id: i64, title: &str, done: bool) -> serde_json::Value {
    serde_json::json!({ "id": id, "title": title, "done": done })
}

/// Serve `tasks` from the list endpoint
pub async fn mount_list(server: &MockServer, tasks: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks))
        .mount(server)
        .await;
}

/// Synchronizer already loaded with `tasks` through one refresh
pub async fn loaded_sync(server: &MockServer, tasks: serde_json::Value) -> TaskSync {
    mount_list(server, tasks).await;
    let sync = sync_for(server);
    sync.refresh().await;
    server.reset().await;
    sync
}
