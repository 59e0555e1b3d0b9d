//! Bookings service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Name of the exclusion constraint backing the overlap check.
///
/// sqlx reports exclusion violations (SQLSTATE 23P01) as `ErrorKind::Other`,
/// so the constraint is matched by name instead.
const NO_ROOM_OVERLAP_CONSTRAINT: &str = "bookings_no_room_overlap";

/// Booking service error variants.
#[derive(Debug, Error)]
pub enum BookingsServiceError {
    /// The room already has an active booking overlapping the stay.
    #[error("room unavailable for the requested dates")]
    RoomUnavailable,

    /// The stay is empty or inverted. Check-out must be after check-in.
    #[error("check-out date must be after check-in date")]
    InvalidStay,

    /// The booking's current status does not allow the transition.
    #[error("invalid booking state transition")]
    InvalidStateTransition,

    /// Booking already exists.
    #[error("booking already exists")]
    AlreadyExists,

    /// Booking was not found.
    #[error("booking not found")]
    NotFound,

    /// Referenced room or customer does not exist in this tenant.
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

impl From<Error> for BookingsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(db_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if db_error.constraint() == Some(NO_ROOM_OVERLAP_CONSTRAINT) {
            return Self::RoomUnavailable;
        }

        match db_error.kind() {
            ErrorKind::UniqueViolation => Self::AlreadyExists,
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            ErrorKind::Other | _ => Self::Sql(error),
        }
    }
}
