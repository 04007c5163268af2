//! Unified error type for data layer
//!
//! Wraps errors from both transactional backends (SQLite, PostgreSQL) while
//! preserving which backend produced them.

use thiserror::Error;

use crate::data::types::InvalidJobRow;

/// Unified error type for data layer operations
#[derive(Error, Debug)]
pub enum DataError {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(sqlx::Error),

    /// PostgreSQL database error
    #[error("PostgreSQL error: {0}")]
    Postgres(sqlx::Error),

    /// Migration failed
    #[error("Migration {version} ({name}) failed on {backend}: {error}")]
    MigrationFailed {
        backend: &'static str,
        version: i32,
        name: String,
        error: String,
    },

    /// A stored row could not be mapped to a domain record
    #[error("{source} (on {backend})")]
    InvalidRow {
        backend: &'static str,
        source: InvalidJobRow,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Get the backend name that generated this error
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
            Self::MigrationFailed { backend, .. } | Self::InvalidRow { backend, .. } => backend,
            Self::Config(_) | Self::Io(_) => "unknown",
        }
    }
}

impl From<crate::data::sqlite::SqliteError> for DataError {
    fn from(e: crate::data::sqlite::SqliteError) -> Self {
        use crate::data::sqlite::SqliteError;
        match e {
            SqliteError::Database(e) => Self::Sqlite(e),
            SqliteError::MigrationFailed {
                version,
                name,
                error,
            } => Self::MigrationFailed {
                backend: "sqlite",
                version,
                name,
                error,
            },
            SqliteError::InvalidRow(source) => Self::InvalidRow {
                backend: "sqlite",
                source,
            },
            SqliteError::Io(e) => Self::Io(e),
        }
    }
}

impl From<crate::data::postgres::PostgresError> for DataError {
    fn from(e: crate::data::postgres::PostgresError) -> Self {
        use crate::data::postgres::PostgresError;
        match e {
            PostgresError::Database(e) => Self::Postgres(e),
            PostgresError::MigrationFailed {
                version,
                name,
                error,
            } => Self::MigrationFailed {
                backend: "postgres",
                version,
                name,
                error,
            },
            PostgresError::InvalidRow(source) => Self::InvalidRow {
                backend: "postgres",
                source,
            },
            PostgresError::Config(msg) => Self::Config(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::postgres::PostgresError;
    use crate::data::sqlite::SqliteError;

    #[test]
    fn test_migration_failed_keeps_backend() {
        let err: DataError = PostgresError::MigrationFailed {
            version: 2,
            name: "add_jobs_filter_index".to_string(),
            error: "syntax error".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Migration 2 (add_jobs_filter_index) failed on postgres: syntax error"
        );
    }

    #[test]
    fn test_backend_method() {
        assert_eq!(DataError::Sqlite(sqlx::Error::PoolClosed).backend(), "sqlite");
        assert_eq!(DataError::Config("x".into()).backend(), "unknown");
    }

    #[test]
    fn test_invalid_row_keeps_backend() {
        let row = InvalidJobRow {
            id: 7,
            reason: "unknown job type 'Gig'".to_string(),
        };
        let err: DataError = SqliteError::InvalidRow(row).into();
        assert_eq!(err.backend(), "sqlite");
        assert!(err.to_string().contains("Invalid job row 7"));
    }

    #[test]
    fn test_postgres_config_error() {
        let err: DataError = PostgresError::Config("missing url".to_string()).into();
        assert!(matches!(err, DataError::Config(ref m) if m == "missing url"));
    }
}
