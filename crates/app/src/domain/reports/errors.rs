//! Reports service errors.

use sqlx::Error;
use thiserror::Error;

/// Report service error variants.
///
/// Reports are pure aggregates, so the only way they fail is storage.
#[derive(Debug, Error)]
pub enum ReportsServiceError {
    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ReportsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
