//! Room Errors

use salvo::http::StatusError;
use tracing::error;

use innkeep_app::domain::rooms::RoomsServiceError;

pub(crate) fn into_status_error(error: RoomsServiceError) -> StatusError {
    match error {
        RoomsServiceError::AlreadyExists => StatusError::conflict().brief("Room already exists"),
        RoomsServiceError::InvalidReference
        | RoomsServiceError::MissingRequiredData
        | RoomsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid room payload")
        }
        RoomsServiceError::NotFound => StatusError::not_found().brief("Room not found"),
        RoomsServiceError::Sql(source) => {
            error!("rooms storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
