//! Error type for the database layer.

use thiserror::Error;

/// Errors surfaced by the database layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not establish a connection or parse the database URL.
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A schema migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(#[from] sqlx::migrate::MigrateError),

    /// A query failed.
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}
