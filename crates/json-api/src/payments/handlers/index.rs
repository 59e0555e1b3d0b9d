//! List Payments Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::payments::records::PaymentRecord;

use crate::{extensions::*, payments::errors::into_status_error, state::State};

/// Payment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentResponse {
    /// The unique identifier of the payment
    pub uuid: Uuid,

    /// The booking the payment was recorded against
    pub booking_uuid: Uuid,

    /// Amount in minor currency units
    pub amount_cents: u64,

    /// When the payment was recorded
    pub created_at: String,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(payment: PaymentRecord) -> Self {
        PaymentResponse {
            uuid: payment.uuid.into(),
            booking_uuid: payment.booking_uuid.into(),
            amount_cents: payment.amount_cents,
            created_at: payment.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentsResponse {
    /// The list of payments, oldest first
    pub payments: Vec<PaymentResponse>,
}

/// List Payments Handler
#[endpoint(
    tags("payments"),
    summary = "List Payments",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payments for the booking"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PaymentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let payments = state
        .app
        .payments
        .list_payments_for_booking(tenant, booking.into_inner().into())
        .await
        .map_err(into_status_error)?
        .into_iter()
        .map(PaymentResponse::from)
        .collect();

    Ok(Json(PaymentsResponse { payments }))
}
