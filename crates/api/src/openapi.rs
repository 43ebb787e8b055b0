//! OpenAPI document for the todo routes, served in development only.

use axum::routing::get;
use axum::{Json, Router};
use todo_db::models::todo::{Todo, TodoInput};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::todos;
use crate::state::AppState;

/// Where the document is mounted.
pub const OPENAPI_PATH: &str = "/openapi/v1.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API"),
    paths(todos::list, todos::create, todos::update, todos::delete),
    components(schemas(Todo, TodoInput, ErrorBody)),
    tags((name = "todos", description = "Todo list CRUD"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}
