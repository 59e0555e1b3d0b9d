//! Revenue Report Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use innkeep_app::domain::reports::records::RevenueReport;

use crate::{extensions::*, reports::errors::into_status_error, state::State};

/// Revenue Report Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RevenueResponse {
    /// Sum of all payment amounts in minor currency units
    pub total_cents: u64,

    /// Number of payments recorded
    pub payment_count: u64,
}

impl From<RevenueReport> for RevenueResponse {
    fn from(report: RevenueReport) -> Self {
        RevenueResponse {
            total_cents: report.total_cents,
            payment_count: report.payment_count,
        }
    }
}

/// Revenue Report Handler
#[endpoint(
    tags("reports"),
    summary = "Revenue Report",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Revenue summary"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RevenueResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let report = state
        .app
        .reports
        .revenue(tenant)
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}
