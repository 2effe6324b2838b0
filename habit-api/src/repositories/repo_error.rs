use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl RepositoryError {
    /// Whether the statement referenced a row (user, habit) that does not exist.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(sqlx::Error::Database(err)) if err.is_foreign_key_violation()
        )
    }
}
