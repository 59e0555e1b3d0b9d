//! Booking Errors

use salvo::http::StatusError;
use tracing::error;

use innkeep_app::domain::bookings::BookingsServiceError;

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::RoomUnavailable => {
            StatusError::conflict().brief("Room unavailable for the requested dates")
        }
        BookingsServiceError::InvalidStateTransition => {
            StatusError::conflict().brief("Invalid booking state transition")
        }
        BookingsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Booking already exists")
        }
        BookingsServiceError::InvalidStay => {
            StatusError::bad_request().brief("Check-out date must be after check-in date")
        }
        BookingsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown room or customer")
        }
        BookingsServiceError::MissingRequiredData | BookingsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid booking payload")
        }
        BookingsServiceError::NotFound => StatusError::not_found().brief("Booking not found"),
        BookingsServiceError::Sql(source) => {
            error!("bookings storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
