//! Booking Records

use std::fmt;
use std::str::FromStr;

use jiff::{Timestamp, civil::Date};
use thiserror::Error;

use crate::{
    domain::{customers::records::CustomerUuid, rooms::records::RoomUuid},
    uuids::declare_uuid,
};

declare_uuid!(
    /// Identifier for a booking row.
    BookingUuid
);

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Created, not yet confirmed. Holds the room.
    Pending,

    /// Confirmed by the property. Holds the room.
    Confirmed,

    /// Guest is in the room.
    CheckedIn,

    /// Stay completed. The room is free again.
    CheckedOut,

    /// Booking withdrawn. The room is free again.
    Cancelled,
}

impl BookingStatus {
    /// Statuses that hold the room and take part in conflict checks.
    pub const ACTIVE: [Self; 3] = [Self::Pending, Self::Confirmed, Self::CheckedIn];

    /// Storage representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether a booking in this status blocks overlapping stays.
    #[must_use]
    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(UnknownBookingStatus),
        }
    }
}

/// Error returned when a stored status string is not recognised.
#[derive(Debug, Error)]
#[error("unknown booking status")]
pub struct UnknownBookingStatus;

/// Booking Record
///
/// The stay is the half-open interval `[check_in, check_out)`: the guest
/// occupies the night of `check_in` but not the night of `check_out`, so
/// back-to-back stays on the same room never conflict.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    /// Unique booking identifier.
    pub uuid: BookingUuid,

    /// Room being booked.
    pub room_uuid: RoomUuid,

    /// Guest the booking is for.
    pub customer_uuid: CustomerUuid,

    /// First occupied night.
    pub check_in: Date,

    /// Day the room is free again.
    pub check_out: Date,

    /// Current lifecycle status.
    pub status: BookingStatus,

    /// Total price in minor currency units.
    pub total_cents: u64,

    /// Booking creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_statuses_hold_the_room() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(BookingStatus::CheckedIn.is_active());
        assert!(!BookingStatus::CheckedOut.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }

    #[test]
    fn status_round_trips_through_storage_form() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn unknown_status_string_fails_to_parse() {
        assert!("NO_SHOW".parse::<BookingStatus>().is_err());
        assert!("pending".parse::<BookingStatus>().is_err());
    }
}
