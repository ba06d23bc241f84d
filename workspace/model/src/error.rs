use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::warn;

/// Store failures, classified so callers can tell constraint violations
/// apart from other database errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A unique column (email, token, slug) already holds the value.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A referenced row is missing, or a referenced row cannot be removed.
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for CatalogError {
    fn from(error: DbErr) -> Self {
        match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                warn!("Unique constraint violation: {}", message);
                CatalogError::UniqueViolation(message)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                warn!("Foreign key constraint violation: {}", message);
                CatalogError::ForeignKeyViolation(message)
            }
            _ => CatalogError::Database(error),
        }
    }
}

/// Type alias for Result with CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
