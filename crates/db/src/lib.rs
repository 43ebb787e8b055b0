//! SQLite storage layer for the todo service.
//!
//! Owns the connection pool, the table definition and the repository that
//! maps rows to [`models::todo::Todo`] values.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Columns every query in [`repositories::TodoRepo`] relies on.
const REQUIRED_COLUMNS: [&str; 3] = ["id", "text", "completed"];

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A `todos` table already exists with a different column layout, e.g. a
    /// `Todos(Id, Todo, IsCompleted)` file written by an older backend.
    #[error(
        "existing `todos` table has columns [{found}], expected [id, text, completed]; \
         database files with another layout are not supported"
    )]
    IncompatibleTable { found: String },
}

/// How long a connection waits on SQLite's write lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Table definition. Safe to run on every startup.
///
/// `AUTOINCREMENT` keeps ids monotonic: a deleted id is never handed out
/// again for the lifetime of the file.
const CREATE_TODOS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS todos (\
        id        INTEGER PRIMARY KEY AUTOINCREMENT, \
        text      TEXT    NOT NULL, \
        completed BOOLEAN NOT NULL DEFAULT FALSE\
    )";

/// Open (creating if missing) the database file at `path`.
pub async fn create_pool(path: &Path, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create the `todos` table if it does not exist yet, then check that the
/// table found in the file has the columns the repository queries.
///
/// SQLite table names are case-insensitive, so a pre-existing `Todos` table
/// makes the `CREATE` a no-op; the column check turns that into a startup
/// error instead of a 500 on every request.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    sqlx::query(CREATE_TODOS_TABLE).execute(pool).await?;

    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('todos')")
        .fetch_all(pool)
        .await?;
    let has_column = |wanted: &str| columns.iter().any(|c| c.eq_ignore_ascii_case(wanted));
    if !REQUIRED_COLUMNS.iter().all(|c| has_column(c)) {
        return Err(SchemaError::IncompatibleTable {
            found: columns.join(", "),
        });
    }

    tracing::debug!("todos table ensured");
    Ok(())
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
