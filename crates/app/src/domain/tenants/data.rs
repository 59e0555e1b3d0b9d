//! Tenant write payloads.

use crate::domain::tenants::records::TenantUuid;

/// Fields persisted when onboarding a hotel property.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTenant {
    /// Identifier for the new tenant row, minted by the caller.
    pub uuid: TenantUuid,

    /// Display name of the property.
    pub name: String,
}
