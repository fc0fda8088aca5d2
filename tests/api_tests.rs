//! HTTP handler tests driving the full router without a socket.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use quire::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    quire::build_router(AppState::new(common::engine()))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

fn post_json(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn generate_returns_docx_with_attachment_headers() {
    let response = app()
        .oneshot(post_json(&json!({
            "doc_props": { "filename": "smoke" },
            "body": [
                { "component": "DocumentTitle", "props": { "document_title": "Smoke" } }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"smoke.docx\""
    );

    let docx = body_bytes(response).await;
    assert!(!docx.is_empty());
    assert!(common::document_xml(&docx).contains("Smoke"));
}

#[tokio::test]
async fn generate_applies_default_filename() {
    let response = app()
        .oneshot(post_json(&json!({
            "body": [
                { "component": "DocumentTitle", "props": { "document_title": "T" } }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"generated_document.docx\""
    );
}

#[tokio::test]
async fn generate_rejects_invalid_plan_with_structured_errors() {
    let response = app()
        .oneshot(post_json(&json!({
            "body": [
                { "component": "DocumentTitle", "props": { "document_title": "" } }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "ValidationFailed");
    assert_eq!(body["valid"], false);
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert!(
        errors.iter().any(|e| e["path"]
            .as_str()
            .unwrap()
            .contains("document_title")),
        "expected an error path mentioning document_title: {errors:?}"
    );
}

#[tokio::test]
async fn generate_rejects_empty_body() {
    let response = app()
        .oneshot(post_json(&json!({ "body": [] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_reports_loaded_components() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["components_loaded"], 5);
}

#[tokio::test]
async fn components_lists_library_contents() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/components")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["count"], 5);
    let names: Vec<&str> = body["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(names.contains(&"DocumentTitle"));
}
