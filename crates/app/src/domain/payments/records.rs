//! Payment Records

use jiff::Timestamp;

use crate::{domain::bookings::records::BookingUuid, uuids::declare_uuid};

declare_uuid!(
    /// Identifier for a payment row.
    PaymentUuid
);

/// Payment Record
///
/// A recorded amount against a booking. Settlement with a payment provider
/// happens elsewhere; rows here are bookkeeping only.
#[derive(Debug, Clone)]
pub struct PaymentRecord {
    /// Unique payment identifier.
    pub uuid: PaymentUuid,

    /// Booking the payment is recorded against.
    pub booking_uuid: BookingUuid,

    /// Amount in minor currency units, always positive.
    pub amount_cents: u64,

    /// Payment creation timestamp.
    pub created_at: Timestamp,
}
