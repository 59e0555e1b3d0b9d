//! Membership Records

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::{auth::UserUuid, domain::tenants::records::TenantUuid, uuids::declare_uuid};

declare_uuid!(
    /// Identifier for a membership row.
    MembershipUuid
);

/// Role a user holds within a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipRole {
    /// Full control over the property, including staff management.
    Owner,

    /// Day-to-day operations: rooms, customers, bookings, payments.
    Staff,
}

impl MembershipRole {
    /// Storage representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Staff => "STAFF",
        }
    }
}

impl fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipRole {
    type Err = UnknownMembershipRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "OWNER" => Ok(Self::Owner),
            "STAFF" => Ok(Self::Staff),
            _ => Err(UnknownMembershipRole),
        }
    }
}

/// Error returned when a stored role string is not recognised.
#[derive(Debug, Error)]
#[error("unknown membership role")]
pub struct UnknownMembershipRole;

/// Membership Record
///
/// Links an externally-managed user identity to a tenant with a role.
#[derive(Debug, Clone)]
pub struct MembershipRecord {
    /// Unique membership identifier.
    pub uuid: MembershipUuid,

    /// Tenant the user belongs to.
    pub tenant_uuid: TenantUuid,

    /// User holding the membership.
    pub user_uuid: UserUuid,

    /// Role granted within the tenant.
    pub role: MembershipRole,

    /// Membership creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// Validated tenant scope for a single request.
///
/// Only ever constructed from a stored membership row, never from
/// client-supplied data alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantScope {
    /// Tenant every operation in the request is confined to.
    pub tenant: TenantUuid,

    /// Role the user holds in that tenant.
    pub role: MembershipRole,
}
