#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use todo_api::config::{AppEnv, ServerConfig};
use todo_api::routes::{self, App};
use todo_api::state::AppState;
use todo_db::DbPool;

/// Build a test `ServerConfig` with development defaults on a loopback address.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        env: AppEnv::Development,
        db_max_connections: 4,
    }
}

/// Open a schema-ready pool on a fresh temporary file.
///
/// The `TempDir` must outlive the pool.
pub async fn test_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().unwrap();
    let pool = todo_db::create_pool(&dir.path().join("todos.db"), 4)
        .await
        .unwrap();
    todo_db::ensure_schema(&pool).await.unwrap();
    (dir, pool)
}

/// Build the full application (same middleware stack as `main.rs`).
pub fn build_test_app_with(pool: DbPool, config: ServerConfig) -> App {
    routes::build_app(AppState {
        pool,
        config: Arc::new(config),
    })
}

/// Build the application on a fresh database.
pub async fn build_test_app() -> (TempDir, DbPool, App) {
    let (dir, pool) = test_pool().await;
    let app = build_test_app_with(pool.clone(), test_config());
    (dir, pool, app)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: App, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: App,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
