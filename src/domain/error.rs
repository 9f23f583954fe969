use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use super::EntityKind;

/// Errors raised by the catalog repositories and services.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i32 },

    /// A unique column (planet name, film title, user email) already holds the value.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    #[must_use]
    pub const fn not_found(kind: EntityKind, id: i32) -> Self {
        Self::NotFound { kind, id }
    }

    /// Classifies a failed write, replacing the driver's unique-violation text
    /// with a message naming the clashing value.
    pub fn from_write(err: DbErr, conflict: impl FnOnce() -> String) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(conflict()),
            _ => err.into(),
        }
    }
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::Validation(detail),
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found(EntityKind::Planet, 7);
        assert_eq!(err.to_string(), "Planet 7 not found");
    }

    #[test]
    fn test_plain_db_error_is_database() {
        let err: CatalogError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, CatalogError::Database(_)));

        let err = CatalogError::from_write(DbErr::Custom("boom".to_string()), || {
            "unused".to_string()
        });
        assert!(matches!(err, CatalogError::Database(_)));
    }
}
