use std::path::PathBuf;

use clap::Parser;

/// Database file used when `--db` is not given.
pub const DEFAULT_DB_PATH: &str = "./todos.db";

/// Command-line arguments for the todo API server.
#[derive(Debug, Parser)]
#[command(name = "todo-api", version, about = "Todo list HTTP API backed by SQLite")]
pub struct Cli {
    /// Path of the SQLite database file. Created if it does not exist.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,
}
