//! Booking Data

use jiff::civil::Date;

use crate::domain::{
    bookings::records::BookingUuid, customers::records::CustomerUuid, rooms::records::RoomUuid,
};

/// New Booking Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    /// UUID to assign to the booking row.
    pub uuid: BookingUuid,

    /// Room to book.
    pub room_uuid: RoomUuid,

    /// Guest the booking is for.
    pub customer_uuid: CustomerUuid,

    /// First occupied night.
    pub check_in: Date,

    /// Day the room is free again; must be after `check_in`.
    pub check_out: Date,

    /// Total price in minor currency units.
    pub total_cents: u64,
}
