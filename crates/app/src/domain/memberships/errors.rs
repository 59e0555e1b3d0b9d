//! Memberships service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Membership service error variants.
#[derive(Debug, Error)]
pub enum MembershipsServiceError {
    /// Membership already exists for this user and tenant.
    #[error("membership already exists")]
    AlreadyExists,

    /// Membership was not found.
    #[error("membership not found")]
    NotFound,

    /// Referenced related row does not exist.
    #[error("related resource not found")]
    InvalidReference,

    /// Required data was missing.
    #[error("missing required data")]
    MissingRequiredData,

    /// Provided data failed validation.
    #[error("invalid data")]
    InvalidData,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for MembershipsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Failures while resolving the tenant scope of a request.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// The request did not claim any tenant.
    #[error("missing tenant context")]
    MissingTenantContext,

    /// The user holds no membership for the claimed tenant.
    ///
    /// Covers nonexistent tenants as well, so a caller probing UUIDs cannot
    /// distinguish "no such tenant" from "no access".
    #[error("no access to the requested tenant")]
    Forbidden,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}
