//! Tenants service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Failures while onboarding or looking up tenants.
#[derive(Debug, Error)]
pub enum TenantsServiceError {
    /// A tenant with this UUID is already registered.
    #[error("tenant already exists")]
    AlreadyExists,

    /// No live tenant row matches the UUID.
    #[error("tenant not found")]
    NotFound,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TenantsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
