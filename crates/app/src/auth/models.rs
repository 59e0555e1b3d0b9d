//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{auth::ApiTokenVersion, uuids::declare_uuid};

declare_uuid!(
    /// Identifier of a user in the external identity system.
    ///
    /// Only the UUID is stored here. Tokens identify a user, never a
    /// tenant, so every request still passes through membership-based
    /// scope resolution.
    UserUuid
);

/// Stored columns consulted while verifying a presented bearer token.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    /// User this API token authenticates.
    pub user_uuid: UserUuid,

    /// Digest scheme the stored hash was built with.
    pub version: ApiTokenVersion,

    /// Hex SHA-256 digest of the canonical verifier input.
    pub token_hash: String,
}

/// Token row fields that are safe to list and display.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// Insert payload for a freshly issued token.
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: ApiTokenVersion,
    pub token_hash: String,
    pub expires_at: Option<Timestamp>,
}

/// Issuance result. `token` is the raw bearer string, shown exactly once.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
