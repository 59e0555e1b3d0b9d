//! Create Room Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::rooms::data::NewRoom;

use crate::{extensions::*, rooms::errors::into_status_error, state::State};

/// Create Room Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRoomRequest {
    pub uuid: Uuid,
    pub number: String,
    pub room_type: String,
    pub rate_cents: u64,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(request: CreateRoomRequest) -> Self {
        NewRoom {
            uuid: request.uuid.into(),
            number: request.number,
            room_type: request.room_type,
            rate_cents: request.rate_cents,
        }
    }
}

/// Room Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoomCreatedResponse {
    /// Created room UUID
    pub uuid: Uuid,
}

/// Create Room Handler
#[endpoint(
    tags("rooms"),
    summary = "Create Room",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Room created"),
        (status_code = StatusCode::CONFLICT, description = "Room number already taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRoomRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RoomCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let uuid = state
        .app
        .rooms
        .create_room(tenant, json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/rooms/{uuid}"), true)
        .or_500("could not encode location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(RoomCreatedResponse { uuid: uuid.into() }))
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
        rooms_service(repo, Router::with_path("rooms").post(handler))
    }

    #[tokio::test]
    async fn test_create_room_success() -> TestResult {
        let uuid = RoomUuid::new();
        let room = make_room(uuid);

        let mut repo = MockRoomsService::new();

        repo.expect_create_room()
            .once()
            .withf(move |tenant, new| {
                *tenant == TEST_TENANT_UUID
                    && *new
                        == NewRoom {
                            uuid,
                            number: "101".to_string(),
                            room_type: "DOUBLE".to_string(),
                            rate_cents: 12_000,
                        }
            })
            .return_once(move |_, _| Ok(room));

        repo.expect_get_room().never();
        repo.expect_list_rooms().never();
        repo.expect_update_room().never();

        let mut res = TestClient::post("http://example.com/rooms")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "number": "101",
                "room_type": "DOUBLE",
                "rate_cents": 12_000,
            }))
            .send(&make_service(repo))
            .await;

        let body: RoomCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/rooms/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_room_duplicate_number_returns_409() -> TestResult {
        let uuid = RoomUuid::new();

        let mut repo = MockRoomsService::new();

        repo.expect_create_room()
            .once()
            .withf(move |tenant, new| *tenant == TEST_TENANT_UUID && new.uuid == uuid)
            .return_once(|_, _| Err(RoomsServiceError::AlreadyExists));

        repo.expect_get_room().never();
        repo.expect_list_rooms().never();
        repo.expect_update_room().never();

        let res = TestClient::post("http://example.com/rooms")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "number": "101",
                "room_type": "DOUBLE",
                "rate_cents": 12_000,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
