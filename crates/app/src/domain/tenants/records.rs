//! Tenant read models.

use jiff::Timestamp;

use crate::uuids::declare_uuid;

declare_uuid!(
    /// Identifier for a tenant row.
    TenantUuid
);

/// A single hotel property and the unit of data isolation. Rows in the
/// per-tenant tables always belong to exactly one tenant.
#[derive(Debug, Clone)]
pub struct TenantRecord {
    /// Primary key.
    pub uuid: TenantUuid,

    /// Display name of the property.
    pub name: String,

    /// When the tenant was onboarded.
    pub created_at: Timestamp,

    /// Last write to this row.
    pub updated_at: Timestamp,

    /// Set when the tenant has been offboarded. Soft-deleted tenants are
    /// invisible to lookups.
    pub deleted_at: Option<Timestamp>,
}
