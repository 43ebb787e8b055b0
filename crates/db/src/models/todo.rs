//! Todo entity and its request payload.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;
use utoipa::ToSchema;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub text: String,
    pub completed: bool,
}

/// Body of `POST /todos` and `PUT /todos/{id}`.
///
/// Missing fields fall back to their defaults; unknown fields are an error.
/// `todo` and `isCompleted` are accepted as aliases so clients written
/// against the older `{"todo", "isCompleted"}` payload keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TodoInput {
    #[serde(alias = "todo")]
    pub text: String,
    #[serde(alias = "isCompleted")]
    pub completed: bool,
}

impl Todo {
    /// Build the stored shape for `id` from a request payload.
    ///
    /// Every field of the input overwrites the record; nothing is merged.
    pub fn from_input(id: DbId, input: TodoInput) -> Self {
        Self {
            id,
            text: input.text,
            completed: input.completed,
        }
    }
}
