pub mod health;
pub mod todos;

use axum::Router;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::panic_response;
use crate::openapi;
use crate::state::AppState;

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the application route tree.
///
/// ```text
/// /health                 service + database health
/// /todos                  list, create
/// /todos/{id}             update, delete
/// /openapi/v1.json        OpenAPI document (development only)
/// ```
pub fn api_routes(expose_openapi: bool) -> Router<AppState> {
    let router = Router::new()
        .merge(health::router())
        .nest("/todos", todos::router());

    if expose_openapi {
        router.merge(openapi::router())
    } else {
        router
    }
}

/// The served application: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Build the full application with its middleware stack.
///
/// Used by both `main.rs` and the integration tests so they exercise the
/// same layers. Path normalization wraps the router rather than being one of
/// its layers, since it has to rewrite the URI before routing (`/todos/`
/// must reach the `/todos` routes).
pub fn build_app(state: AppState) -> App {
    let request_id_header = axum::http::HeaderName::from_static(REQUEST_ID_HEADER);

    // Any origin, method and header: this service is meant for trusted
    // development or demo deployments.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = api_routes(state.config.expose_openapi())
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
