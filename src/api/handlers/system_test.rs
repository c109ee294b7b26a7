//! Tests for system routes, the catch-all and static file serving.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

async fn test_app(static_dir: Option<&std::path::Path>) -> axum::Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    routes::create_router(AppState::new(db), static_dir)
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn text_body(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn root_returns_html_greeting() {
    let app = test_app(None).await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(text_body(response).await, "<h1>hello world</h1>");
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok() {
    let app = test_app(None).await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&text_body(response).await).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_endpoint_is_json_not_found() {
    let app = test_app(None).await;

    for (method, uri) in [
        ("GET", "/api/nothing"),
        ("POST", "/api/users"),
        ("GET", "/api/notes/1/extra"),
        ("PATCH", "/api/notes/1"),
        ("POST", "/health"),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let body: Value = serde_json::from_str(&text_body(response).await).unwrap();
        assert_eq!(body, json!({"error": "unknown endpoint"}));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn cors_allows_any_origin() {
    let app = test_app(None).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/notes")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn docs_are_served() {
    let app = test_app(None).await;

    let response = get(&app, "/docs").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text_body(response).await.contains("Notes API"));
}

#[tokio::test(flavor = "multi_thread")]
async fn static_files_are_served_for_unmatched_paths() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('notes')").unwrap();
    let app = test_app(Some(dir.path())).await;

    let response = get(&app, "/app.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response).await, "console.log('notes')");

    // API routes still win over files
    let response = get(&app, "/api/notes").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response).await, "[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_static_file_falls_back_to_unknown_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(Some(dir.path())).await;

    let response = get(&app, "/missing.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&text_body(response).await).unwrap();
    assert_eq!(body, json!({"error": "unknown endpoint"}));
}
