//! Booking Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{bookings::get::BookingResponse, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingsResponse {
    /// The list of bookings
    pub bookings: Vec<BookingResponse>,
}

/// Booking Index Handler
///
/// Returns all bookings, ordered by check-in date.
#[endpoint(
    tags("bookings"),
    summary = "List Bookings",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BookingsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let bookings = state
        .app
        .bookings
        .list_bookings(tenant)
        .await
        .or_500("failed to fetch bookings")?;

    Ok(Json(BookingsResponse {
        bookings: bookings.into_iter().map(Into::into).collect(),
    }))
}
