//! Payment Data

use crate::domain::{bookings::records::BookingUuid, payments::records::PaymentUuid};

/// New Payment Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    /// UUID to assign to the payment row.
    pub uuid: PaymentUuid,

    /// Booking the payment is recorded against.
    pub booking_uuid: BookingUuid,

    /// Amount in minor currency units; must be positive.
    pub amount_cents: u64,
}
