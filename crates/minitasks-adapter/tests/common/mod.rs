/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for minitasks-adapter tests

use minitasks_adapter::{ClientConfig, TasksClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server under the usual `/api/v1` prefix
pub fn client_for(server: &MockServer) -> TasksClient {
    TasksClient::with_config_and_base_url(
        ClientConfig::default(),
        &format!("{}/api/v1", server.uri()),
    )
    .expect("client init")
}

/// Task JSON as the service serializes it
pub fn task_json(id: i64, title: &str, done: bool) -> serde_json::Value {
    serde_json::json!({ "id": id, "title": title, "done": done })
}
