//! Customer Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{customers::get::CustomerResponse, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomersResponse {
    /// The list of customers
    pub customers: Vec<CustomerResponse>,
}

/// Customer Index Handler
///
/// Returns all customers, ordered by name.
#[endpoint(
    tags("customers"),
    summary = "List Customers",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CustomersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let customers = state
        .app
        .customers
        .list_customers(tenant)
        .await
        .or_500("failed to fetch customers")?;

    Ok(Json(CustomersResponse {
        customers: customers.into_iter().map(Into::into).collect(),
    }))
}
