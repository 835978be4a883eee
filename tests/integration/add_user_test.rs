//! Integration tests for the invitation endpoint.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{ACCESS_CODE, TestApp};

const EMPTY_LISTING: &str = r#"{"data":[],"nextCursor":null}"#;

const CREATED_WITH_LINK: &str = r#"[{
    "user": {
        "id": "a1b2",
        "email": "new@example.com",
        "inviteAcceptUrl": "https://n8n.example.com/signup?inviterId=x&inviteeId=a1b2",
        "emailSent": false
    },
    "error": ""
}]"#;

#[tokio::test]
async fn test_missing_email() {
    let mut app = TestApp::new().await;
    let list = app.mock_list(200, EMPTY_LISTING, 0).await;
    let create = app.mock_create(201, CREATED_WITH_LINK, 0).await;

    let response = app.add_user(json!({ "accessCode": ACCESS_CODE })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "Email is required" })
    );
    list.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_missing_access_code() {
    let mut app = TestApp::new().await;
    let list = app.mock_list(200, EMPTY_LISTING, 0).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": "" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Access code is required");
    list.assert_async().await;
}

#[tokio::test]
async fn test_invalid_access_code() {
    let mut app = TestApp::new().await;
    let list = app.mock_list(200, EMPTY_LISTING, 0).await;
    let create = app.mock_create(201, CREATED_WITH_LINK, 0).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": "wrong" }))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "Invalid access code. Please try again." })
    );
    list.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_success() {
    let mut app = TestApp::new().await;
    let list = app.mock_list(200, EMPTY_LISTING, 1).await;
    let create = app.mock_create(201, CREATED_WITH_LINK, 1).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "success": true,
            "message": "User added successfully",
            "inviteUrl": "https://n8n.example.com/signup?inviterId=x&inviteeId=a1b2",
            "user": { "email": "new@example.com" }
        })
    );
    list.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_numeric_access_code() {
    let mut app = TestApp::new().await;
    let _list = app.mock_list(200, "[]", 1).await;
    let _create = app.mock_create(201, CREATED_WITH_LINK, 1).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": 1234 }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_invite_link_locations() {
    let bodies = [
        r#"{"inviteAcceptUrl":"https://link"}"#,
        r#"[{"data":{"inviteAcceptUrl":"https://link"}}]"#,
        r#"[{"user":{"inviteAcceptUrl":"https://link"}}]"#,
        r#"{"inviteUrl":"https://link"}"#,
    ];

    for body in bodies {
        let mut app = TestApp::new().await;
        let _list = app.mock_list(200, "[]", 1).await;
        let _create = app.mock_create(200, body, 1).await;

        let response = app
            .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
            .await;

        assert_eq!(response.status, StatusCode::OK, "create body: {body}");
        assert_eq!(response.body["inviteUrl"], "https://link");
    }
}

#[tokio::test]
async fn test_duplicate_email() {
    let mut app = TestApp::new().await;
    let list = app
        .mock_list(
            200,
            r#"{"data":[{"id":"1","email":"Someone@Example.com"},{"id":"2","email":" NEW@example.com "}]}"#,
            1,
        )
        .await;
    let create = app.mock_create(201, CREATED_WITH_LINK, 0).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["error"],
        "This email is already registered. Please enter a different email."
    );
    list.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_members_without_email_never_match() {
    let mut app = TestApp::new().await;
    let _list = app
        .mock_list(200, r#"{"users":[{"id":"1"},{"id":"2","email":null}]}"#, 1)
        .await;
    let create = app.mock_create(201, CREATED_WITH_LINK, 1).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    create.assert_async().await;
}

#[tokio::test]
async fn test_missing_invite_link() {
    let mut app = TestApp::new().await;
    let _list = app.mock_list(200, "[]", 1).await;
    let create = app
        .mock_create(
            201,
            r#"[{"user":{"id":"a1b2","email":"new@example.com","emailSent":true},"error":""}]"#,
            1,
        )
        .await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
    assert_eq!(
        response.body["error"],
        "User created but no invitation link was returned"
    );
    assert_eq!(response.body["debug"]["user"]["id"], "a1b2");
    create.assert_async().await;
}

#[tokio::test]
async fn test_lookup_failure_propagates_status() {
    let mut app = TestApp::new().await;
    let _list = app
        .mock_list(401, r#"{"message":"'X-N8N-API-KEY' header required"}"#, 1)
        .await;
    let create = app.mock_create(201, CREATED_WITH_LINK, 0).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "'X-N8N-API-KEY' header required" })
    );
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_failure_without_message() {
    let mut app = TestApp::new().await;
    let _list = app.mock_list(200, "[]", 1).await;
    let _create = app.mock_create(500, "{}", 1).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["error"],
        "Request failed with status code 500"
    );
}

#[tokio::test]
async fn test_form_encoded_body() {
    let mut app = TestApp::new().await;
    let _list = app.mock_list(200, "[]", 1).await;
    let _create = app.mock_create(201, CREATED_WITH_LINK, 1).await;

    let response = app
        .request_raw(
            "POST",
            "/api/add-user",
            Some("application/x-www-form-urlencoded"),
            format!("email=new%40example.com&accessCode={ACCESS_CODE}"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "new@example.com");
}

#[tokio::test]
async fn test_body_without_content_type_is_empty() {
    let app = TestApp::new().await;

    let response = app
        .request_raw("POST", "/api/add-user", None, "email=x".to_string())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Email is required");
}

#[tokio::test]
async fn test_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .request_raw(
            "POST",
            "/api/add-user",
            Some("application/json"),
            "{\"email\":".to_string(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "Invalid request body" })
    );
}

#[tokio::test]
async fn test_create_with_empty_body_reports_missing_link() {
    let mut app = TestApp::new().await;
    let _list = app.mock_list(200, "[]", 1).await;
    let create = app.mock_create(201, "", 1).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["error"],
        "User created but no invitation link was returned"
    );
    create.assert_async().await;
}

#[tokio::test]
async fn test_non_json_listing_counts_as_empty() {
    let mut app = TestApp::new().await;
    let list = app
        .n8n
        .mock("GET", "/api/v1/users")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>ok</html>")
        .expect(1)
        .create_async()
        .await;
    let create = app.mock_create(201, CREATED_WITH_LINK, 1).await;

    let response = app
        .add_user(json!({ "email": "new@example.com", "accessCode": ACCESS_CODE }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    list.assert_async().await;
    create.assert_async().await;
}
