//! Occupancy Report Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use serde::{Deserialize, Serialize};

use innkeep_app::domain::reports::records::OccupancyReport;

use crate::{extensions::*, reports::errors::into_status_error, state::State};

/// Occupancy Report Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OccupancyResponse {
    /// Day the snapshot is for, ISO-8601
    pub on_date: String,

    /// Total rooms in the property
    pub total_rooms: u64,

    /// Rooms with a guest checked in on the day
    pub occupied_rooms: u64,
}

impl From<OccupancyReport> for OccupancyResponse {
    fn from(report: OccupancyReport) -> Self {
        OccupancyResponse {
            on_date: report.on_date.to_string(),
            total_rooms: report.total_rooms,
            occupied_rooms: report.occupied_rooms,
        }
    }
}

/// Occupancy Report Handler
///
/// Snapshot of checked-in rooms for a single day, today unless an `on`
/// query parameter names another date.
#[endpoint(
    tags("reports"),
    summary = "Occupancy Report",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Occupancy snapshot"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    on: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OccupancyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let on_date = on.into_on_date()?;

    let report = state
        .app
        .reports
        .occupancy(tenant, on_date)
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}
