//! Update Room Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::rooms::data::RoomUpdate;

use crate::{
    extensions::*,
    rooms::{errors::into_status_error, get::RoomResponse},
    state::State,
};

/// Update Room Request
///
/// The door number is immutable; only category and rate can change.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateRoomRequest {
    pub room_type: String,
    pub rate_cents: u64,
}

impl From<UpdateRoomRequest> for RoomUpdate {
    fn from(request: UpdateRoomRequest) -> Self {
        RoomUpdate {
            room_type: request.room_type,
            rate_cents: request.rate_cents,
        }
    }
}

/// Update Room Handler
#[endpoint(
    tags("rooms"),
    summary = "Update Room",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Room updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Room not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    room: PathParam<Uuid>,
    json: JsonBody<UpdateRoomRequest>,
    depot: &mut Depot,
) -> Result<Json<RoomResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let room = state
        .app
        .rooms
        .update_room(tenant, room.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(room.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use innkeep_app::domain::rooms::{
        MockRoomsService, RoomsServiceError, records::RoomUuid,
    };

    use crate::test_helpers::{TEST_TENANT_UUID, make_room, rooms_service};

    use super::*;

    fn make_service(repo: MockRoomsService) -> Service {
        rooms_service(repo, Router::with_path("rooms/{room}").put(handler))
    }

    #[tokio::test]
    async fn test_update_room_success() -> TestResult {
        let uuid = RoomUuid::new();

        let mut room = make_room(uuid);

        room.room_type = "SUITE".to_string();
        room.rate_cents = 25_000;

        let mut repo = MockRoomsService::new();

        repo.expect_update_room()
            .once()
            .withf(move |tenant, u, update| {
                *tenant == TEST_TENANT_UUID
                    && *u == uuid
                    && *update
                        == RoomUpdate {
                            room_type: "SUITE".to_string(),
                            rate_cents: 25_000,
                        }
            })
            .return_once(move |_, _, _| Ok(room));

        repo.expect_get_room().never();
        repo.expect_create_room().never();
        repo.expect_list_rooms().never();

        let mut res = TestClient::put(format!("http://example.com/rooms/{uuid}"))
            .json(&json!({ "room_type": "SUITE", "rate_cents": 25_000 }))
            .send(&make_service(repo))
            .await;

        let body: RoomResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.room_type, "SUITE");
        assert_eq!(body.rate_cents, 25_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_room_not_found_returns_404() -> TestResult {
        let uuid = RoomUuid::new();

        let mut repo = MockRoomsService::new();

        repo.expect_update_room()
            .once()
            .withf(move |tenant, u, _| *tenant == TEST_TENANT_UUID && *u == uuid)
            .return_once(|_, _, _| Err(RoomsServiceError::NotFound));

        repo.expect_get_room().never();
        repo.expect_create_room().never();
        repo.expect_list_rooms().never();

        let res = TestClient::put(format!("http://example.com/rooms/{uuid}"))
            .json(&json!({ "room_type": "SUITE", "rate_cents": 25_000 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
