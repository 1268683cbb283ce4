#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use intake_api::config::{LogFormat, ServerConfig};
use intake_api::router::build_app_router;
use intake_api::state::AppState;

pub const BOUNDARY: &str = "intake-test-boundary";

/// Application under test plus the temporary directories it writes to.
///
/// The directories live as long as this value.
pub struct TestApp {
    pub router: Router,
    pub upload_dir: TempDir,
    pub static_dir: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// an empty store and the given directories.
pub fn test_config(upload_dir: &Path, static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_path_buf(),
        static_dir: static_dir.to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        seed_sample_data: false,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router through the same builder `main.rs`
/// uses, starting from an empty store.
pub fn build_test_app() -> TestApp {
    build_test_app_with(|_| {})
}

/// Like [`build_test_app`], letting the caller adjust the config first.
pub fn build_test_app_with(customize: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let upload_dir = TempDir::new().unwrap();
    let static_dir = TempDir::new().unwrap();

    let mut config = test_config(upload_dir.path(), static_dir.path());
    customize(&mut config);

    let state = AppState::in_memory(config.clone());
    let router = build_app_router(state, &config);

    TestApp {
        router,
        upload_dir,
        static_dir,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart form with a single file part.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    contents: &str,
) -> Response<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\
         \r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    post_multipart(app, uri, body).await
}

/// POST a pre-built multipart body using [`BOUNDARY`].
pub async fn post_multipart(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A record body that satisfies every validation rule.
pub fn valid_record() -> serde_json::Value {
    serde_json::json!({
        "firstName": "John",
        "lastName": "Doe",
        "employeeId": "ABC-12345",
        "phoneNumber": "+1 (555) 555-5555",
        "salary": 50000,
        "startDate": "2020-01-01",
        "supervisorEmail": "sup@the4d.ca",
        "costCenter": "AB-123-XYZ",
        "projectCode": "PRJ-2024-001",
        "privacyConsent": true
    })
}
