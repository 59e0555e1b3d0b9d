//! Get Customer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::customers::records::CustomerRecord;

use crate::{customers::errors::into_status_error, extensions::*, state::State};

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// The unique identifier of the customer
    pub uuid: Uuid,

    /// Guest's full name
    pub full_name: String,

    /// Contact email, unique within the hotel
    pub email: String,

    /// Optional contact phone number
    pub phone: Option<String>,

    /// The date and time the customer was created
    pub created_at: String,

    /// The date and time the customer was last updated
    pub updated_at: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            uuid: customer.uuid.into(),
            full_name: customer.full_name,
            email: customer.email,
            phone: customer.phone,
            created_at: customer.created_at.to_string(),
            updated_at: customer.updated_at.to_string(),
        }
    }
}

/// Get Customer Handler
///
/// Returns a customer.
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let customer = state
        .app
        .customers
        .get_customer(tenant, customer.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
