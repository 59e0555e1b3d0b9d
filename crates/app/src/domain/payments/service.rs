//! Payments service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        bookings::records::BookingUuid,
        payments::{
            data::NewPayment, errors::PaymentsServiceError, records::PaymentRecord,
            repository::PgPaymentsRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgPaymentsService {
    db: Db,
    repository: PgPaymentsRepository,
}

impl PgPaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPaymentsRepository::new(),
        }
    }
}

#[async_trait]
impl PaymentsService for PgPaymentsService {
    async fn record_payment(
        &self,
        tenant: TenantUuid,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError> {
        if payment.amount_cents == 0 {
            return Err(PaymentsServiceError::InvalidAmount);
        }

        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        if !self
            .repository
            .booking_exists(&mut tx, payment.booking_uuid)
            .await?
        {
            return Err(PaymentsServiceError::InvalidReference);
        }

        let created = self.repository.create_payment(&mut tx, &payment).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_payments_for_booking(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<Vec<PaymentRecord>, PaymentsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        if !self.repository.booking_exists(&mut tx, booking).await? {
            return Err(PaymentsServiceError::NotFound);
        }

        let payments = self
            .repository
            .list_payments_for_booking(&mut tx, booking)
            .await?;

        tx.commit().await?;

        Ok(payments)
    }
}

#[automock]
#[async_trait]
/// Payment bookkeeping operations, all scoped to a tenant.
pub trait PaymentsService: Send + Sync {
    /// Records a positive amount against a booking.
    async fn record_payment(
        &self,
        tenant: TenantUuid,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError>;

    /// Lists payments recorded against a booking, oldest first.
    async fn list_payments_for_booking(
        &self,
        tenant: TenantUuid,
        booking: BookingUuid,
    ) -> Result<Vec<PaymentRecord>, PaymentsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::payments::records::PaymentUuid,
        test::{
            TestContext,
            helpers::{create_booking, create_customer, create_room, date},
        },
    };

    use super::*;

    async fn booked_stay(ctx: &TestContext) -> Result<BookingUuid, Box<dyn std::error::Error>> {
        let room = create_room(ctx, ctx.tenant_uuid, "101").await?;
        let customer = create_customer(ctx, ctx.tenant_uuid, "payer@example.com").await?;

        let booking = create_booking(
            ctx,
            ctx.tenant_uuid,
            room.uuid,
            customer.uuid,
            date("2025-01-01"),
            date("2025-01-05"),
        )
        .await?;

        Ok(booking.uuid)
    }

    #[tokio::test]
    async fn record_payment_returns_correct_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let booking = booked_stay(&ctx).await?;
        let uuid = PaymentUuid::new();

        let payment = ctx
            .payments
            .record_payment(
                ctx.tenant_uuid,
                NewPayment {
                    uuid,
                    booking_uuid: booking,
                    amount_cents: 15_000,
                },
            )
            .await?;

        assert_eq!(payment.uuid, uuid);
        assert_eq!(payment.booking_uuid, booking);
        assert_eq!(payment.amount_cents, 15_000);

        Ok(())
    }

    #[tokio::test]
    async fn record_payment_zero_amount_returns_invalid_amount() -> TestResult {
        let ctx = TestContext::new().await;
        let booking = booked_stay(&ctx).await?;

        let result = ctx
            .payments
            .record_payment(
                ctx.tenant_uuid,
                NewPayment {
                    uuid: PaymentUuid::new(),
                    booking_uuid: booking,
                    amount_cents: 0,
                },
            )
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::InvalidAmount)),
            "expected InvalidAmount, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn record_payment_unknown_booking_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .payments
            .record_payment(
                ctx.tenant_uuid,
                NewPayment {
                    uuid: PaymentUuid::new(),
                    booking_uuid: BookingUuid::new(),
                    amount_cents: 5_000,
                },
            )
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn record_payment_cross_tenant_booking_returns_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let booking = booked_stay(&ctx).await?;

        let tenant_b = ctx.create_tenant("Tenant B").await;

        let result = ctx
            .payments
            .record_payment(
                tenant_b,
                NewPayment {
                    uuid: PaymentUuid::new(),
                    booking_uuid: booking,
                    amount_cents: 5_000,
                },
            )
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::InvalidReference)),
            "expected InvalidReference for cross-tenant booking, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_payments_returns_recorded_payments_in_order() -> TestResult {
        let ctx = TestContext::new().await;
        let booking = booked_stay(&ctx).await?;

        let first = PaymentUuid::new();
        let second = PaymentUuid::new();

        ctx.payments
            .record_payment(
                ctx.tenant_uuid,
                NewPayment {
                    uuid: first,
                    booking_uuid: booking,
                    amount_cents: 10_000,
                },
            )
            .await?;

        ctx.payments
            .record_payment(
                ctx.tenant_uuid,
                NewPayment {
                    uuid: second,
                    booking_uuid: booking,
                    amount_cents: 5_000,
                },
            )
            .await?;

        let payments = ctx
            .payments
            .list_payments_for_booking(ctx.tenant_uuid, booking)
            .await?;

        let uuids: Vec<PaymentUuid> = payments.iter().map(|p| p.uuid).collect();

        assert_eq!(uuids, vec![first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn list_payments_unknown_booking_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .payments
            .list_payments_for_booking(ctx.tenant_uuid, BookingUuid::new())
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_payments_empty_for_unpaid_booking() -> TestResult {
        let ctx = TestContext::new().await;
        let booking = booked_stay(&ctx).await?;

        let payments = ctx
            .payments
            .list_payments_for_booking(ctx.tenant_uuid, booking)
            .await?;

        assert!(payments.is_empty());

        Ok(())
    }
}
