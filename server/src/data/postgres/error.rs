//! PostgreSQL error types

use thiserror::Error;

use crate::data::types::InvalidJobRow;

#[derive(Error, Debug)]
pub enum PostgresError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration {version} ({name}) failed: {error}")]
    MigrationFailed {
        version: i32,
        name: String,
        error: String,
    },

    #[error(transparent)]
    InvalidRow(#[from] InvalidJobRow),

    #[error("Configuration error: {0}")]
    Config(String),
}
