//! Payment Errors

use salvo::http::StatusError;
use tracing::error;

use innkeep_app::domain::payments::PaymentsServiceError;

pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::InvalidAmount => {
            StatusError::bad_request().brief("Payment amount must be positive")
        }
        PaymentsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Payment already exists")
        }
        PaymentsServiceError::NotFound => StatusError::not_found().brief("Booking not found"),
        PaymentsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown booking")
        }
        PaymentsServiceError::MissingRequiredData | PaymentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payment payload")
        }
        PaymentsServiceError::Sql(source) => {
            error!("payments storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
