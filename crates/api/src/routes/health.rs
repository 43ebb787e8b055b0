//! `GET /health`: liveness plus a view of the todo store.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use todo_db::repositories::TodoRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database cannot be reached.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of stored todos; `null` when the count query fails.
    pub todo_count: Option<i64>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = todo_db::health_check(&state.pool).await.is_ok();

    let todo_count = match TodoRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to count todos for health check");
            None
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        todo_count,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
