//! Member operation flows over the HTTP surface
//!
//! Covers command dispatch, role preconditions, and the status codes each
//! failure class maps to.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use studyhub_auth::StaticTokenVerifier;
use tower::ServiceExt;

fn test_app() -> Router {
    let verifier = StaticTokenVerifier::new()
        .with_token("token-alice", "Alice")
        .with_token("token-bob", "Bob")
        .with_token("token-zoe", "Zoe");
    studyhub_app::create_app(Arc::new(verifier))
}

async fn post(app: &Router, uri: &str, token: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Create a group of the given type as Zoe and return its members URL prefix
async fn create_group(app: &Router, group_type: &str) -> String {
    let (status, body) = post(
        app,
        "/api/study-groups",
        "token-zoe",
        Some(json!({
            "name": "Test Group",
            "description": "",
            "type": group_type
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    format!("/api/study-groups/{}/members", body["id"])
}

#[tokio::test]
async fn test_request_to_join_public_group() {
    let app = test_app();
    let members = create_group(&app, "public").await;

    let (status, _) = post(&app, &format!("{members}/request-to-join"), "token-bob", None).await;
    assert_eq!(status, StatusCode::OK);

    // Already a member now
    let (status, _) = post(&app, &format!("{members}/request-to-join"), "token-bob", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // And may leave again
    let (status, _) = post(&app, &format!("{members}/leave"), "token-bob", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post(&app, &format!("{members}/leave"), "token-bob", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_to_join_closed_group_needs_approval() {
    let app = test_app();
    let members = create_group(&app, "closed").await;

    let (status, _) = post(&app, &format!("{members}/request-to-join"), "token-bob", None).await;
    assert_eq!(status, StatusCode::OK);

    // Zoe (admin) accepts the request
    let (status, _) = post(
        &app,
        &format!("{members}/accept-request-to-join"),
        "token-zoe",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Bob is now a member, a second accept has no requester to act on
    let (status, _) = post(
        &app,
        &format!("{members}/accept-request-to-join"),
        "token-zoe",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_to_join_invite_only_group_rejected() {
    let app = test_app();
    let members = create_group(&app, "invite-only").await;

    let (status, _) = post(&app, &format!("{members}/request-to-join"), "token-bob", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invite_accept_flow() {
    let app = test_app();
    let members = create_group(&app, "invite-only").await;

    let (status, _) = post(
        &app,
        &format!("{members}/invite"),
        "token-zoe",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Invitee cannot be invited twice
    let (status, _) = post(
        &app,
        &format!("{members}/invite"),
        "token-zoe",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, &format!("{members}/accept-invite"), "token-bob", None).await;
    assert_eq!(status, StatusCode::OK);

    // The invite is consumed
    let (status, _) = post(&app, &format!("{members}/accept-invite"), "token-bob", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reject_invite_flow() {
    let app = test_app();
    let members = create_group(&app, "invite-only").await;

    post(
        &app,
        &format!("{members}/invite"),
        "token-zoe",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;

    let (status, _) = post(&app, &format!("{members}/reject-invite"), "token-bob", None).await;
    assert_eq!(status, StatusCode::OK);

    // A rejected invitee may be invited again
    let (status, _) = post(
        &app,
        &format!("{members}/invite"),
        "token-zoe",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_operations_require_admin_role() {
    let app = test_app();
    let members = create_group(&app, "public").await;

    // Bob joins as a plain member
    post(&app, &format!("{members}/request-to-join"), "token-bob", None).await;

    // A member cannot invite
    let (status, _) = post(
        &app,
        &format!("{members}/invite"),
        "token-bob",
        Some(json!({ "targetUserId": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // A non-member cannot either
    let (status, _) = post(
        &app,
        &format!("{members}/remove-member"),
        "token-alice",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_remove_member() {
    let app = test_app();
    let members = create_group(&app, "public").await;

    post(&app, &format!("{members}/request-to-join"), "token-bob", None).await;

    let (status, _) = post(
        &app,
        &format!("{members}/remove-member"),
        "token-zoe",
        Some(json!({ "targetUserId": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Admins cannot remove themselves
    let (status, _) = post(
        &app,
        &format!("{members}/remove-member"),
        "token-zoe",
        Some(json!({ "targetUserId": "Zoe" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_operation_requires_target() {
    let app = test_app();
    let members = create_group(&app, "public").await;

    let (status, _) = post(&app, &format!("{members}/invite"), "token-zoe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        &format!("{members}/invite"),
        "token-zoe",
        Some(json!({ "targetUserId": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_command_rejected() {
    let app = test_app();
    let members = create_group(&app, "public").await;

    let (status, body) = post(&app, &format!("{members}/self-destruct"), "token-zoe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("invalid command"));
}

#[tokio::test]
async fn test_member_operation_on_missing_group() {
    let app = test_app();

    let (status, _) = post(
        &app,
        "/api/study-groups/99/members/request-to-join",
        "token-bob",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_member_operation_requires_auth() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/study-groups/1/members/leave")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
