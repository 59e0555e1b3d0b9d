//! Membership Data

use crate::{
    auth::UserUuid,
    domain::{
        memberships::records::{MembershipRole, MembershipUuid},
        tenants::records::TenantUuid,
    },
};

/// New Membership Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewMembership {
    /// UUID to assign to the membership row.
    pub uuid: MembershipUuid,

    /// Tenant the membership belongs to.
    pub tenant_uuid: TenantUuid,

    /// User being granted access.
    pub user_uuid: UserUuid,

    /// Role to grant.
    pub role: MembershipRole,
}
