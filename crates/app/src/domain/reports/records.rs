//! Report Records

use jiff::civil::Date;

/// Occupancy snapshot for a single day.
///
/// A room counts as occupied when a CHECKED_IN booking covers the day.
/// Derived from bookings at query time; rooms store no occupancy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyReport {
    /// Day the snapshot is for.
    pub on_date: Date,

    /// Total rooms in the property.
    pub total_rooms: u64,

    /// Rooms with a guest checked in on the day.
    pub occupied_rooms: u64,
}

/// Revenue summary across all recorded payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueReport {
    /// Sum of all payment amounts in minor currency units.
    pub total_cents: u64,

    /// Number of payments recorded.
    pub payment_count: u64,
}
