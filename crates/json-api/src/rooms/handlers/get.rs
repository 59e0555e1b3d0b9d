//! Get Room Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::rooms::records::RoomRecord;

use crate::{extensions::*, rooms::errors::into_status_error, state::State};

/// Room Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoomResponse {
    /// The unique identifier of the room
    pub uuid: Uuid,

    /// Door number, unique within the hotel
    pub number: String,

    /// Room category
    pub room_type: String,

    /// Nightly rate in minor currency units
    pub rate_cents: u64,

    /// The date and time the room was created
    pub created_at: String,

    /// The date and time the room was last updated
    pub updated_at: String,
}

impl From<RoomRecord> for RoomResponse {
    fn from(room: RoomRecord) -> Self {
        Self {
            uuid: room.uuid.into(),
            number: room.number,
            room_type: room.room_type,
            rate_cents: room.rate_cents,
            created_at: room.created_at.to_string(),
            updated_at: room.updated_at.to_string(),
        }
    }
}

/// Get Room Handler
///
/// Returns a room.
#[endpoint(
    tags("rooms"),
    summary = "Get Room",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    room: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RoomResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let room = state
        .app
        .rooms
        .get_room(tenant, room.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(room.into()))
}
