//! Get Booking Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::bookings::records::BookingRecord;

use crate::{bookings::errors::into_status_error, extensions::*, state::State};

/// Booking Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    /// The unique identifier of the booking
    pub uuid: Uuid,

    /// Room being booked
    pub room_uuid: Uuid,

    /// Guest the booking is for
    pub customer_uuid: Uuid,

    /// First occupied night
    pub check_in: String,

    /// Day the room is free again
    pub check_out: String,

    /// Current lifecycle status
    pub status: String,

    /// Total price in minor currency units
    pub total_cents: u64,

    /// The date and time the booking was created
    pub created_at: String,

    /// The date and time the booking was last updated
    pub updated_at: String,
}

impl From<BookingRecord> for BookingResponse {
    fn from(booking: BookingRecord) -> Self {
        Self {
            uuid: booking.uuid.into(),
            room_uuid: booking.room_uuid.into(),
            customer_uuid: booking.customer_uuid.into(),
            check_in: booking.check_in.to_string(),
            check_out: booking.check_out.to_string(),
            status: booking.status.to_string(),
            total_cents: booking.total_cents,
            created_at: booking.created_at.to_string(),
            updated_at: booking.updated_at.to_string(),
        }
    }
}

/// Get Booking Handler
///
/// Returns a booking.
#[endpoint(
    tags("bookings"),
    summary = "Get Booking",
    security(("bearer_auth" = []))
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
        .get_booking(tenant, booking.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking.into()))
}
