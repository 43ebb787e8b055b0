//! Handlers for the `/todos` resource.
//!
//! Extractor failures are taken as `Result` so they render through
//! [`AppError`] with the same `{ "detail": ... }` shape as domain errors.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use todo_core::error::CoreError;
use todo_core::pagination::PageParams;
use todo_core::types::DbId;
use todo_db::models::todo::{Todo, TodoInput};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Todo", id })
}

/// GET /todos?skip=&limit=
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    params(
        ("skip" = Option<i64>, Query, description = "Records to skip (default 0, negative treated as 0)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10, clamped to 0..=100)")
    ),
    responses(
        (status = 200, description = "Todos in ascending id order", body = Vec<Todo>),
        (status = 400, description = "Malformed query string", body = ErrorBody)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<Vec<Todo>>> {
    let Query(params) = params?;
    let todos = TodoRepo::list(&state.pool, params.resolve()).await?;
    Ok(Json(todos))
}

/// POST /todos
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = TodoInput,
    responses(
        (status = 200, description = "Created todo with its assigned id", body = Todo),
        (status = 422, description = "Body is not a valid todo payload", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> AppResult<Json<Todo>> {
    let Json(input) = payload?;
    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, completed = todo.completed, "Todo created");

    Ok(Json(todo))
}

/// PUT /todos/{id}
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = TodoInput,
    responses(
        (status = 200, description = "Updated todo", body = Todo),
        (status = 404, description = "No todo with this id", body = ErrorBody),
        (status = 422, description = "Body is not a valid todo payload", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> AppResult<Json<Todo>> {
    let Path(id) = id?;
    let Json(input) = payload?;

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(todo_id = id, completed = todo.completed, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /todos/{id}
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo as it was before deletion", body = Todo),
        (status = 404, description = "No todo with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Todo>> {
    let Path(id) = id?;

    let todo = TodoRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(todo))
}
