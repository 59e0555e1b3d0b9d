//! Test Helpers

use jiff::civil::Date;
use sqlx::query;

use crate::{
    domain::{
        bookings::{
            BookingsService, BookingsServiceError,
            data::NewBooking,
            records::{BookingRecord, BookingStatus, BookingUuid},
        },
        customers::{
            CustomersService, CustomersServiceError,
            data::NewCustomer,
            records::{CustomerRecord, CustomerUuid},
        },
        rooms::{
            RoomsService, RoomsServiceError,
            data::NewRoom,
            records::{RoomRecord, RoomUuid},
        },
        tenants::records::TenantUuid,
    },
    test::TestContext,
};

/// Parse a `YYYY-MM-DD` literal into a civil date.
pub(crate) fn date(value: &str) -> Date {
    value.parse().expect("invalid date literal")
}

pub(crate) async fn create_room(
    ctx: &TestContext,
    tenant: TenantUuid,
    number: &str,
) -> Result<RoomRecord, RoomsServiceError> {
    ctx.rooms
        .create_room(
            tenant,
            NewRoom {
                uuid: RoomUuid::new(),
                number: number.to_string(),
                room_type: "DOUBLE".to_string(),
                rate_cents: 12_000,
            },
        )
        .await
}

pub(crate) async fn create_customer(
    ctx: &TestContext,
    tenant: TenantUuid,
    email: &str,
) -> Result<CustomerRecord, CustomersServiceError> {
    ctx.customers
        .create_customer(
            tenant,
            NewCustomer {
                uuid: CustomerUuid::new(),
                full_name: "Ada Lovelace".to_string(),
                email: email.to_string(),
                phone: None,
            },
        )
        .await
}

pub(crate) async fn create_booking(
    ctx: &TestContext,
    tenant: TenantUuid,
    room: RoomUuid,
    customer: CustomerUuid,
    check_in: Date,
    check_out: Date,
) -> Result<BookingRecord, BookingsServiceError> {
    ctx.bookings
        .create_booking(
            tenant,
            NewBooking {
                uuid: BookingUuid::new(),
                room_uuid: room,
                customer_uuid: customer,
                check_in,
                check_out,
                total_cents: 30_000,
            },
        )
        .await
}

/// Force a booking into a status that has no admission path, such as seeded
/// `CONFIRMED` rows. Writes through the superuser pool, which is not subject
/// to row-level security.
pub(crate) async fn set_booking_status(
    ctx: &TestContext,
    booking: BookingUuid,
    status: BookingStatus,
) -> Result<(), sqlx::Error> {
    query("UPDATE bookings SET status = $2 WHERE uuid = $1")
        .bind(booking.into_uuid())
        .bind(status.as_str())
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}
