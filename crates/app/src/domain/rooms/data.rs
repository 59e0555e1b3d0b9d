//! Room Data

use crate::domain::rooms::records::RoomUuid;

/// New Room Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    /// UUID to assign to the room row.
    pub uuid: RoomUuid,

    /// Door number, unique within the tenant.
    pub number: String,

    /// Room category.
    pub room_type: String,

    /// Nightly rate in minor currency units.
    pub rate_cents: u64,
}

/// Room Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct RoomUpdate {
    /// Replacement room category.
    pub room_type: String,

    /// Replacement nightly rate.
    pub rate_cents: u64,
}
