use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Entity named in a not-found failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    Movie,
    Actor,
    Review,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Movie => "Movie",
            EntityKind::Actor => "Actor",
            EntityKind::Review => "Review",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Rating must be between 1 and 5.")]
    RatingOutOfRange(i32),
}

/// Failure of a catalog write. The `Display` text is what clients see.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("{0} not found.")]
    NotFound(EntityKind),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Storage(String),
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => CatalogError::Conflict(detail),
            _ => CatalogError::Storage(err.to_string()),
        }
    }
}

/// Returns true when the database rejected the write because a referenced row is gone.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(CatalogError::NotFound(EntityKind::Movie).to_string(), "Movie not found.");
        assert_eq!(CatalogError::NotFound(EntityKind::Actor).to_string(), "Actor not found.");
        assert_eq!(CatalogError::NotFound(EntityKind::Review).to_string(), "Review not found.");
    }

    #[test]
    fn rating_message_is_fixed() {
        let err: CatalogError = ValidationError::RatingOutOfRange(9).into();
        assert_eq!(err.to_string(), "Rating must be between 1 and 5.");
    }
}
