//! Bookings service.
//!
//! Admission control for stays. A booking is only created when no active
//! booking overlaps it, with the conflict check, reference checks and insert
//! in one tenant transaction. An exclusion constraint on the table backs the
//! check up, so two racing admissions can never both commit.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        bookings::{
            data::NewBooking,
            errors::BookingsServiceError,
            records::{BookingRecord, BookingStatus, BookingUuid},
            repository::PgBookingsRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    db: Db,
    repository: PgBookingsRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBookingsRepository::new(),
        }
    }

    async fn transition(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
        allowed_from: &[BookingStatus],
        to: BookingStatus,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        // Distinguishes a missing booking from one in the wrong status.
        self.repository
            .find_booking(&mut tx, booking)
            .await?
            .ok_or(BookingsServiceError::NotFound)?;

        let updated = self
            .repository
            .transition_booking(&mut tx, booking, allowed_from, to)
            .await?
            .ok_or(BookingsServiceError::InvalidStateTransition)?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    async fn create_booking(
        &self,
        tenant: TenantUuid,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError> {
        if booking.check_in >= booking.check_out {
            return Err(BookingsServiceError::InvalidStay);
        }

        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        // Both lookups run under the tenant's RLS context, so another
        // tenant's rooms and customers look exactly like missing ones.
        if !self.repository.room_exists(&mut tx, booking.room_uuid).await? {
            return Err(BookingsServiceError::InvalidReference);
        }

        if !self
            .repository
            .customer_exists(&mut tx, booking.customer_uuid)
            .await?
        {
            return Err(BookingsServiceError::InvalidReference);
        }

        if self
            .repository
            .find_conflicting_booking(&mut tx, booking.room_uuid, booking.check_in, booking.check_out)
            .await?
            .is_some()
        {
            return Err(BookingsServiceError::RoomUnavailable);
        }

        // A concurrent admission that slipped past the check above still
        // trips the bookings_no_room_overlap constraint here.
        let created = self.repository.create_booking(&mut tx, &booking).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_booking(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let found = self
            .repository
            .find_booking(&mut tx, booking)
            .await?
            .ok_or(BookingsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_bookings(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let bookings = self.repository.list_bookings(&mut tx).await?;

        tx.commit().await?;

        Ok(bookings)
    }

    async fn check_in(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
        today: Date,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let current = self
            .repository
            .find_booking(&mut tx, booking)
            .await?
            .ok_or(BookingsServiceError::NotFound)?;

        // No check-in before the stay starts.
        if today < current.check_in {
            return Err(BookingsServiceError::InvalidStateTransition);
        }

        let updated = self
            .repository
            .transition_booking(
                &mut tx,
                booking,
                &[BookingStatus::Pending, BookingStatus::Confirmed],
                BookingStatus::CheckedIn,
            )
            .await?
            .ok_or(BookingsServiceError::InvalidStateTransition)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn check_out(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        self.transition(
            tenant,
            booking,
            &[BookingStatus::CheckedIn],
            BookingStatus::CheckedOut,
        )
        .await
    }

    async fn cancel(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        self.transition(
            tenant,
            booking,
            &[
                BookingStatus::Pending,
                BookingStatus::Confirmed,
                BookingStatus::CheckedIn,
            ],
            BookingStatus::Cancelled,
        )
        .await
    }
}

#[automock]
#[async_trait]
/// Booking admission and lifecycle operations, all scoped to a tenant.
pub trait BookingsService: Send + Sync {
    /// Creates a booking if the room is free for the whole stay.
    ///
    /// Fails with [`BookingsServiceError::InvalidStay`] when the interval is
    /// empty or inverted, [`BookingsServiceError::InvalidReference`] when the
    /// room or customer does not resolve inside the tenant, and
    /// [`BookingsServiceError::RoomUnavailable`] when an active booking
    /// overlaps `[check_in, check_out)`.
    async fn create_booking(
        &self,
        tenant: TenantUuid,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Retrieves a single booking.
    async fn get_booking(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Retrieves all bookings, ordered by check-in date.
    async fn list_bookings(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;

    /// Moves a PENDING or CONFIRMED booking to CHECKED_IN.
    ///
    /// Rejected while `today` is before the check-in date.
    async fn check_in(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
        today: Date,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Moves a CHECKED_IN booking to CHECKED_OUT, freeing the room.
    async fn check_out(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Cancels an active booking, freeing the room immediately.
    async fn cancel(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;
}
