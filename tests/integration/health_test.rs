//! Integration tests for the health check and static front-end.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::new().await;
    let list = app.mock_list(500, "{}", 0).await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["n8nUrl"], app.config.n8n.url.as_str());
    list.assert_async().await;
}

#[tokio::test]
async fn test_index_page() {
    let app = TestApp::new().await;

    let response = app.request_raw("GET", "/", None, String::new()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("/api/add-user"));
}

#[tokio::test]
async fn test_unknown_static_path() {
    let app = TestApp::new().await;

    let response = app
        .request_raw("GET", "/missing.css", None, String::new())
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
