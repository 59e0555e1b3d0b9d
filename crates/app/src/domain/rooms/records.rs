//! Room Records

use jiff::Timestamp;

use crate::uuids::declare_uuid;

declare_uuid!(
    /// Identifier for a room row.
    RoomUuid
);

/// Room Record
///
/// Rooms carry no stored availability flag. Whether a room is free for a
/// date range is always derived from its bookings at query time.
#[derive(Debug, Clone)]
pub struct RoomRecord {
    /// Unique room identifier.
    pub uuid: RoomUuid,

    /// Door number, unique within the tenant.
    pub number: String,

    /// Room category, e.g. "single" or "suite".
    pub room_type: String,

    /// Nightly rate in minor currency units.
    pub rate_cents: u64,

    /// Room creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
