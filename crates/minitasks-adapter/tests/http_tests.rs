/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{client_for, setup_mock_server, task_json};
use minitasks_adapter::{ClientConfig, TaskApi, TaskId, TasksClient, TasksError};
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(TasksClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
    };
    let _client = assert_ok!(TasksClient::with_config(config));
}

#[tokio::test]
async fn test_trait_object_dispatches_to_http() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json(1, "A", false),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tasks/"))
        .and(body_json(serde_json::json!({ "title": "B" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(2, "B", false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tasks/1/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(1, "A", true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/tasks/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api: Arc<dyn TaskApi> = Arc::new(client_for(&server));

    let listed = assert_ok!(api.list_tasks().await);
    assert_eq!(listed.len(), 1);

    let created = assert_ok!(api.create_task("B").await);
    assert_eq!(created.id, TaskId(2));

    let toggled = assert_ok!(api.toggle_task(TaskId(1)).await);
    assert!(toggled.done);

    assert_ok!(api.delete_task(TaskId(2)).await);
}

#[tokio::test]
async fn test_server_error_carries_status() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tasks/1/toggle"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .toggle_task(TaskId(1))
        .await
        .expect_err("toggle should fail");

    assert!(matches!(err, TasksError::Api { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(err.to_string(), "500 Internal Server Error: Internal Server Error");
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout: Duration::from_millis(50),
        connect_timeout: Duration::from_secs(1),
    };
    let client = assert_ok!(TasksClient::with_config_and_base_url(config, &server.uri()));

    let err = client.list_tasks().await.expect_err("request should time out");
    match err {
        TasksError::Http(inner) => assert!(inner.is_timeout()),
        other => panic!("Expected Http error variant, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = assert_ok!(TasksClient::with_config_and_base_url(
        ClientConfig::default(),
        "http://127.0.0.1:9",
    ));

    let err = client.list_tasks().await.expect_err("connection should fail");
    assert!(matches!(err, TasksError::Http(_)));
    assert_eq!(err.status(), None);
}
