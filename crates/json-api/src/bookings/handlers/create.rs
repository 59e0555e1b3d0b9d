//! Create Booking Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::bookings::data::NewBooking;

use crate::{bookings::errors::into_status_error, extensions::*, state::State};

/// Create Booking Request
///
/// The stay is the half-open interval `[check_in, check_out)`; dates travel
/// as ISO-8601 strings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBookingRequest {
    pub uuid: Uuid,
    pub room_uuid: Uuid,
    pub customer_uuid: Uuid,
    pub check_in: String,
    pub check_out: String,
    pub total_cents: u64,
}

/// Booking Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingCreatedResponse {
    /// Created booking UUID
    pub uuid: Uuid,
}

/// Create Booking Handler
#[endpoint(
    tags("bookings"),
    summary = "Create Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking created"),
        (status_code = StatusCode::CONFLICT, description = "Room unavailable for the requested dates"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "bookings.create",
    skip(json, depot, res),
    fields(
        tenant_uuid = tracing::field::Empty,
        room_uuid = tracing::field::Empty,
        check_in = tracing::field::Empty,
        check_out = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBookingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;
    let request = json.into_inner();

    let check_in = request
        .check_in
        .parse::<Date>()
        .or_400("could not parse \"check_in\" date")?;
    let check_out = request
        .check_out
        .parse::<Date>()
        .or_400("could not parse \"check_out\" date")?;

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));
    span.record("room_uuid", tracing::field::display(request.room_uuid));
    span.record("check_in", tracing::field::display(check_in));
    span.record("check_out", tracing::field::display(check_out));

    let booking = NewBooking {
        uuid: request.uuid.into(),
        room_uuid: request.room_uuid.into(),
        customer_uuid: request.customer_uuid.into(),
        check_in,
        check_out,
        total_cents: request.total_cents,
    };

    let uuid = state
        .app
        .bookings
        .create_booking(tenant, booking)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/bookings/{uuid}"), true)
        .or_500("could not encode location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(booking_uuid = %uuid, "created booking");

    Ok(Json(BookingCreatedResponse { uuid: uuid.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use innkeep_app::domain::{
        bookings::{BookingsServiceError, MockBookingsService, records::BookingUuid},
        customers::records::CustomerUuid,
        rooms::records::RoomUuid,
    };

    use crate::test_helpers::{TEST_TENANT_UUID, bookings_service, make_booking};

    use super::*;

    fn make_service(repo: MockBookingsService) -> Service {
        bookings_service(repo, Router::with_path("bookings").post(handler))
    }

    fn strict_transitions(repo: &mut MockBookingsService) {
        repo.expect_get_booking().never();
        repo.expect_list_bookings().never();
        repo.expect_check_in().never();
        repo.expect_check_out().never();
        repo.expect_cancel().never();
    }

    #[tokio::test]
    async fn test_create_booking_success() -> TestResult {
        let uuid = BookingUuid::new();
        let room_uuid = RoomUuid::new();
        let customer_uuid = CustomerUuid::new();
        let check_in: Date = "2026-03-01".parse()?;
        let check_out: Date = "2026-03-04".parse()?;

        let mut booking = make_booking(uuid);

        booking.room_uuid = room_uuid;
        booking.customer_uuid = customer_uuid;

        let mut repo = MockBookingsService::new();

        repo.expect_create_booking()
            .once()
            .withf(move |tenant, new| {
                *tenant == TEST_TENANT_UUID
                    && *new
                        == NewBooking {
                            uuid,
                            room_uuid,
                            customer_uuid,
                            check_in,
                            check_out,
                            total_cents: 36_000,
                        }
            })
            .return_once(move |_, _| Ok(booking));

        strict_transitions(&mut repo);

        let mut res = TestClient::post("http://example.com/bookings")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "room_uuid": room_uuid.into_uuid(),
                "customer_uuid": customer_uuid.into_uuid(),
                "check_in": "2026-03-01",
                "check_out": "2026-03-04",
                "total_cents": 36_000,
            }))
            .send(&make_service(repo))
            .await;

        let body: BookingCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/bookings/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_overlap_returns_409() -> TestResult {
        let mut repo = MockBookingsService::new();

        repo.expect_create_booking()
            .once()
            .withf(|tenant, _| *tenant == TEST_TENANT_UUID)
            .return_once(|_, _| Err(BookingsServiceError::RoomUnavailable));

        strict_transitions(&mut repo);

        let res = TestClient::post("http://example.com/bookings")
            .json(&json!({
                "uuid": BookingUuid::new().into_uuid(),
                "room_uuid": RoomUuid::new().into_uuid(),
                "customer_uuid": CustomerUuid::new().into_uuid(),
                "check_in": "2026-03-01",
                "check_out": "2026-03-04",
                "total_cents": 36_000,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_inverted_stay_returns_400() -> TestResult {
        let mut repo = MockBookingsService::new();

        repo.expect_create_booking()
            .once()
            .withf(|tenant, _| *tenant == TEST_TENANT_UUID)
            .return_once(|_, _| Err(BookingsServiceError::InvalidStay));

        strict_transitions(&mut repo);

        let res = TestClient::post("http://example.com/bookings")
            .json(&json!({
                "uuid": BookingUuid::new().into_uuid(),
                "room_uuid": RoomUuid::new().into_uuid(),
                "customer_uuid": CustomerUuid::new().into_uuid(),
                "check_in": "2026-03-04",
                "check_out": "2026-03-01",
                "total_cents": 36_000,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_unknown_room_returns_400() -> TestResult {
        let mut repo = MockBookingsService::new();

        repo.expect_create_booking()
            .once()
            .withf(|tenant, _| *tenant == TEST_TENANT_UUID)
            .return_once(|_, _| Err(BookingsServiceError::InvalidReference));

        strict_transitions(&mut repo);

        let res = TestClient::post("http://example.com/bookings")
            .json(&json!({
                "uuid": BookingUuid::new().into_uuid(),
                "room_uuid": RoomUuid::new().into_uuid(),
                "customer_uuid": CustomerUuid::new().into_uuid(),
                "check_in": "2026-03-01",
                "check_out": "2026-03-04",
                "total_cents": 36_000,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_unparseable_date_returns_400() -> TestResult {
        let mut repo = MockBookingsService::new();

        repo.expect_create_booking().never();

        strict_transitions(&mut repo);

        let res = TestClient::post("http://example.com/bookings")
            .json(&json!({
                "uuid": BookingUuid::new().into_uuid(),
                "room_uuid": RoomUuid::new().into_uuid(),
                "customer_uuid": CustomerUuid::new().into_uuid(),
                "check_in": "March 1st",
                "check_out": "2026-03-04",
                "total_cents": 36_000,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
