//! Payments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    bookings::records::BookingUuid,
    payments::{
        data::NewPayment,
        records::{PaymentRecord, PaymentUuid},
    },
};

const CREATE_PAYMENT_SQL: &str = include_str!("sql/create_payment.sql");
const LIST_PAYMENTS_FOR_BOOKING_SQL: &str = include_str!("sql/list_payments_for_booking.sql");
const BOOKING_EXISTS_SQL: &str = include_str!("sql/booking_exists.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: &NewPayment,
    ) -> Result<PaymentRecord, sqlx::Error> {
        let amount_i64 =
            i64::try_from(payment.amount_cents).map_err(|e| sqlx::Error::ColumnDecode {
                index: "amount_cents".to_string(),
                source: Box::new(e),
            })?;

        query_as::<Postgres, PaymentRecord>(CREATE_PAYMENT_SQL)
            .bind(payment.uuid.into_uuid())
            .bind(payment.booking_uuid.into_uuid())
            .bind(amount_i64)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_payments_for_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
    ) -> Result<Vec<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(LIST_PAYMENTS_FOR_BOOKING_SQL)
            .bind(booking.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn booking_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(BOOKING_EXISTS_SQL)
            .bind(booking.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let amount_i64: i64 = row.try_get("amount_cents")?;

        let amount_cents = u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount_cents".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: PaymentUuid::from_uuid(row.try_get("uuid")?),
            booking_uuid: BookingUuid::from_uuid(row.try_get("booking_uuid")?),
            amount_cents,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
