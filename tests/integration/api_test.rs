//! End-to-end API tests
//!
//! Each test builds a fresh app with seeded stores and a static token
//! verifier, then drives it through `tower::ServiceExt::oneshot`.

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

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

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

#[tokio::test]
async fn test_health_check_requires_no_auth() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/study-groups", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"]["code"].is_string());
}

#[tokio::test]
async fn test_unknown_token_rejected() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/study-groups",
        Some("token-stranger"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_study_group() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/study-groups/1",
        Some("token-alice"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Tech Nerds");
    assert_eq!(body["type"], "public");
    // Rosters are not part of the wire shape
    assert!(body.get("members").is_none());
}

#[tokio::test]
async fn test_get_missing_study_group() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/study-groups/99",
        Some("token-alice"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_study_group_invalid_id() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/study-groups/abc",
        Some("token-alice"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_study_groups() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/study-groups", Some("token-bob"), None).await;

    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 6);
    assert_eq!(groups[0]["name"], "Tech Nerds");
    assert_eq!(groups[5]["name"], "Trinners for Winners");
}

#[tokio::test]
async fn test_create_study_group() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/study-groups",
        Some("token-zoe"),
        Some(json!({
            "name": "Compilers Club",
            "description": "Parsing and codegen",
            "type": "closed"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
    assert_eq!(body["type"], "closed");

    // The creator administers the new group: they may update its details
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/study-groups/7",
        Some("token-zoe"),
        Some(json!({
            "name": "Compilers Club",
            "description": "Parsing, codegen, and optimization",
            "type": "closed"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Parsing, codegen, and optimization");
}

#[tokio::test]
async fn test_create_study_group_rejects_bad_payload() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/study-groups",
        Some("token-zoe"),
        Some(json!({ "name": "", "description": "x", "type": "public" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing `type` fails JSON deserialization before the handler runs
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/study-groups",
        Some("token-zoe"),
        Some(json!({ "name": "No type" })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_update_requires_admin() {
    let app = test_app();
    // Bob is a plain member of group 1
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/study-groups/1",
        Some("token-bob"),
        Some(json!({
            "name": "Renamed",
            "description": "",
            "type": "public"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_study_group() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/api/study-groups/1",
        Some("token-bob"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/api/study-groups/1",
        Some("token-alice"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/study-groups/1",
        Some("token-alice"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_verify() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/api/auth/verify", Some("token-zoe"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["uid"], "Zoe");
}

#[tokio::test]
async fn test_module_catalogue() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/modules", Some("token-alice"), None).await;

    assert_eq!(status, StatusCode::OK);
    let modules = body.as_array().unwrap();
    assert_eq!(modules.len(), 8);
    assert_eq!(modules[0]["id"], "CSU44000");

    // Add a new module, then a duplicate
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/modules",
        Some("token-alice"),
        Some(json!({ "id": "CSU44098X", "name": "Extended Group Design" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/modules",
        Some("token-alice"),
        Some(json!({ "id": "CSU44052", "name": "Computer Graphics" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_user_profile_lifecycle() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some("token-zoe"),
        Some(json!({ "name": "Zoe" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "Zoe");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/users/Zoe/modules",
        Some("token-zoe"),
        Some(json!({ "selectedModules": ["CSU44061", "CSU44099"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api/users/Zoe", Some("token-zoe"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modules"].as_array().unwrap().len(), 2);
    assert_eq!(body["modules"][0]["id"], "CSU44061");
}

#[tokio::test]
async fn test_set_modules_unknown_module() {
    let app = test_app();

    send(
        &app,
        Method::POST,
        "/api/users",
        Some("token-zoe"),
        Some(json!({ "name": "Zoe" })),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/users/Zoe/modules",
        Some("token-zoe"),
        Some(json!({ "selectedModules": ["CSU00000"] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_user() {
    let app = test_app();
    let (status, _) = send(&app, Method::GET, "/api/users/Ghost", Some("token-alice"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
