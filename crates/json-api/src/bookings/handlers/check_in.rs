//! Check-In Booking Handler

use std::sync::Arc;

use jiff::Zoned;
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    bookings::{errors::into_status_error, get::BookingResponse},
    extensions::*,
    state::State,
};

/// Check-In Booking Handler
///
/// Moves a PENDING or CONFIRMED booking to CHECKED_IN. Rejected while
/// today's date is before the check-in date.
#[endpoint(
    tags("bookings"),
    summary = "Check In",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Guest checked in"),
        (status_code = StatusCode::CONFLICT, description = "Booking status does not allow check-in"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let booking = state
        .app
        .bookings
        .check_in(tenant, booking.into_inner().into(), Zoned::now().date())
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking.into()))
}
