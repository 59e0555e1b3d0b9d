//! Record Payment Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::payments::data::NewPayment;

use crate::{extensions::*, payments::errors::into_status_error, state::State};

/// Record Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePaymentRequest {
    pub uuid: Uuid,
    pub amount_cents: u64,
}

/// Payment Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentCreatedResponse {
    /// Created payment UUID
    pub uuid: Uuid,
}

/// Record Payment Handler
#[endpoint(
    tags("payments"),
    summary = "Record Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Payment recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    json: JsonBody<CreatePaymentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let booking = booking.into_inner();
    let request = json.into_inner();

    let payment = NewPayment {
        uuid: request.uuid.into(),
        booking_uuid: booking.into(),
        amount_cents: request.amount_cents,
    };

    let uuid = state
        .app
        .payments
        .record_payment(tenant, payment)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/bookings/{booking}/payments/{uuid}"), true)
        .or_500("could not encode location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(PaymentCreatedResponse { uuid: uuid.into() }))
}
