//! Repository for the `todos` table.
//!
//! Every call borrows a pooled connection for one statement; nothing is
//! cached between calls, so each lookup re-reads the file.

use todo_core::pagination::Page;
use todo_core::types::DbId;

use crate::models::todo::{Todo, TodoInput};
use crate::DbPool;

/// Column list for `todos` queries.
const COLUMNS: &str = "id, text, completed";

/// Provides data access for todo records.
pub struct TodoRepo;

impl TodoRepo {
    /// List one page of todos in ascending id order.
    pub async fn list(pool: &DbPool, page: Page) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id ASC LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Todo>(&query)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Find a single todo by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a todo; the id is assigned by SQLite.
    pub async fn create(pool: &DbPool, input: &TodoInput) -> Result<Todo, sqlx::Error> {
        let result = sqlx::query("INSERT INTO todos (text, completed) VALUES (?, ?)")
            .bind(&input.text)
            .bind(input.completed)
            .execute(pool)
            .await?;
        Ok(Todo::from_input(result.last_insert_rowid(), input.clone()))
    }

    /// Overwrite both fields of an existing todo.
    ///
    /// Returns `None` if no row has this id.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &TodoInput,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET text = ?, completed = ? WHERE id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.text)
            .bind(input.completed)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo, returning the row as it was just before removal.
    ///
    /// Returns `None` if no row has this id.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("DELETE FROM todos WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored todos.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
