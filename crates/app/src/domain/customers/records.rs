//! Customer Records

use jiff::Timestamp;

use crate::uuids::declare_uuid;

declare_uuid!(
    /// Identifier for a customer row.
    CustomerUuid
);

/// Customer Record
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    /// Unique customer identifier.
    pub uuid: CustomerUuid,

    /// Guest's full name.
    pub full_name: String,

    /// Contact email, unique within the tenant.
    pub email: String,

    /// Optional contact phone number.
    pub phone: Option<String>,

    /// Customer creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
