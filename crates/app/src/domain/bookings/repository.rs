//! Bookings Repository

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    bookings::{
        data::NewBooking,
        records::{BookingRecord, BookingStatus, BookingUuid},
    },
    customers::records::CustomerUuid,
    rooms::records::RoomUuid,
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const FIND_BOOKING_SQL: &str = include_str!("sql/find_booking.sql");
const LIST_BOOKINGS_SQL: &str = include_str!("sql/list_bookings.sql");
const FIND_CONFLICTING_BOOKING_SQL: &str = include_str!("sql/find_conflicting_booking.sql");
const TRANSITION_BOOKING_SQL: &str = include_str!("sql/transition_booking.sql");
const ROOM_EXISTS_SQL: &str = include_str!("sql/room_exists.sql");
const CUSTOMER_EXISTS_SQL: &str = include_str!("sql/customer_exists.sql");

fn total_to_i64(total_cents: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(total_cents).map_err(|e| sqlx::Error::ColumnDecode {
        index: "total_cents".to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingsRepository;

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: &NewBooking,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(booking.uuid.into_uuid())
            .bind(booking.room_uuid.into_uuid())
            .bind(booking.customer_uuid.into_uuid())
            .bind(SqlxDate::from(booking.check_in))
            .bind(SqlxDate::from(booking.check_out))
            .bind(total_to_i64(booking.total_cents)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
    ) -> Result<Option<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(FIND_BOOKING_SQL)
            .bind(booking.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Returns the UUID of any active booking overlapping `[check_in, check_out)`
    /// on the room.
    pub(crate) async fn find_conflicting_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: RoomUuid,
        check_in: Date,
        check_out: Date,
    ) -> Result<Option<BookingUuid>, sqlx::Error> {
        let conflict: Option<uuid::Uuid> = query_scalar(FIND_CONFLICTING_BOOKING_SQL)
            .bind(room.into_uuid())
            .bind(SqlxDate::from(check_in))
            .bind(SqlxDate::from(check_out))
            .fetch_optional(&mut **tx)
            .await?;

        Ok(conflict.map(BookingUuid::from_uuid))
    }

    /// Moves a booking to `to` only while its status is one of `allowed_from`.
    ///
    /// Returns `None` when the row is missing or its status is not in the
    /// allowed set; the guard and the update are a single statement, so two
    /// racing transitions cannot both win.
    pub(crate) async fn transition_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
        allowed_from: &[BookingStatus],
        to: BookingStatus,
    ) -> Result<Option<BookingRecord>, sqlx::Error> {
        let allowed: Vec<String> = allowed_from
            .iter()
            .map(|status| status.as_str().to_string())
            .collect();

        query_as::<Postgres, BookingRecord>(TRANSITION_BOOKING_SQL)
            .bind(booking.into_uuid())
            .bind(to.as_str())
            .bind(allowed)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn room_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: RoomUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(ROOM_EXISTS_SQL)
            .bind(room.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn customer_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(CUSTOMER_EXISTS_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        let total_i64: i64 = row.try_get("total_cents")?;

        let total_cents = u64::try_from(total_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total_cents".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("uuid")?),
            room_uuid: RoomUuid::from_uuid(row.try_get("room_uuid")?),
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            check_in: row.try_get::<SqlxDate, _>("check_in")?.to_jiff(),
            check_out: row.try_get::<SqlxDate, _>("check_out")?.to_jiff(),
            status,
            total_cents,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
