//! Database-specific error types and conversions.

use sello_core::error::SelloError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Failed to decode row: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Duplicate record: {entity} with id {id}")]
    AlreadyExists { entity: String, id: String },
}

impl DbError {
    /// Classify a failed write. SurrealDB reports a taken record key as
    /// "already exists" and a unique-index hit as "already contains";
    /// both are duplicates, everything else passes through.
    pub(crate) fn from_write(entity: &str, id: &str, err: surrealdb::Error) -> Self {
        let message = err.to_string();
        if message.contains("already exists") || message.contains("already contains") {
            DbError::AlreadyExists {
                entity: entity.into(),
                id: id.into(),
            }
        } else {
            DbError::Surreal(err)
        }
    }
}

impl From<DbError> for SelloError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => SelloError::NotFound { entity, id },
            DbError::AlreadyExists { entity, .. } => SelloError::AlreadyExists { entity },
            other => SelloError::Database(other.to_string()),
        }
    }
}
