//! API token formatting, parsing, and digest input construction.
//!
//! A presented token looks like `ik_v1_{token_uuid}.{secret_hex}`. Only the
//! UUID and a SHA-256 digest derived from the secret are stored server-side;
//! the secret itself exists in memory just long enough to verify, and is
//! zeroed when dropped.

use std::{fmt, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::auth::UserUuid;

/// Leading segment of every Innkeep API token.
pub const API_TOKEN_PREFIX: &str = "ik";

/// Number of random secret bytes in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

const API_TOKEN_SECRET_HEX_CHARS: usize = API_TOKEN_SECRET_BYTES * 2;

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("token does not match the expected shape")]
    InvalidFormat,

    #[error("unsupported token version")]
    UnsupportedVersion,

    #[error("token secret is not valid hex")]
    InvalidSecretEncoding,
}

/// Wire and storage version of the token scheme. Stored alongside each hash
/// so the digest recipe can change without invalidating issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenVersion {
    V1,
}

impl ApiTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for ApiTokenVersion {
    type Error = ApiTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

impl FromStr for ApiTokenVersion {
    type Err = ApiTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

/// Random token secret. Never logged, never stored, zeroed on drop.
#[derive(Clone)]
pub struct ApiTokenSecret {
    bytes: [u8; API_TOKEN_SECRET_BYTES],
}

impl ApiTokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; API_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; API_TOKEN_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiTokenSecret").finish_non_exhaustive()
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Pieces of a syntactically valid presented token.
#[derive(Debug, Clone)]
pub struct ParsedApiToken {
    pub token_uuid: Uuid,
    pub version: ApiTokenVersion,
    pub secret: ApiTokenSecret,
}

#[must_use]
pub fn generate_api_token_secret() -> ApiTokenSecret {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    ApiTokenSecret::from_bytes(secret)
}

#[must_use]
pub fn format_api_token(
    token_uuid: Uuid,
    version: ApiTokenVersion,
    secret: &ApiTokenSecret,
) -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}_{}.{}",
        version.segment(),
        token_uuid.simple(),
        encode_secret_hex(secret.as_bytes())
    )
}

pub fn parse_api_token(token: &str) -> Result<ParsedApiToken, ApiTokenError> {
    let rest = token
        .strip_prefix(API_TOKEN_PREFIX)
        .and_then(|rest| rest.strip_prefix('_'))
        .ok_or(ApiTokenError::InvalidFormat)?;

    let (version_segment, rest) = rest.split_once('_').ok_or(ApiTokenError::InvalidFormat)?;
    let (uuid_segment, secret_hex) = rest.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

    let version = ApiTokenVersion::from_str(version_segment)?;
    let token_uuid = Uuid::try_parse(uuid_segment).map_err(|_| ApiTokenError::InvalidFormat)?;
    let secret = decode_secret_hex(secret_hex).ok_or(ApiTokenError::InvalidSecretEncoding)?;

    Ok(ParsedApiToken {
        token_uuid,
        version,
        secret: ApiTokenSecret::from_bytes(secret),
    })
}

/// Canonical digest input for a token.
///
/// Binding the owning user into the input means a stored hash can never
/// verify against another user's row, even if two tokens shared a secret.
///
/// Layout: `{token_uuid_hex}:{version_decimal}:{user_uuid_hex}:{secret_hex}`
#[must_use]
pub fn build_verifier_input(
    token_uuid: &Uuid,
    version: ApiTokenVersion,
    user_uuid: &UserUuid,
    secret: &ApiTokenSecret,
) -> Vec<u8> {
    format!(
        "{}:{}:{}:{}",
        token_uuid.simple(),
        version.as_i16(),
        user_uuid.into_uuid().simple(),
        encode_secret_hex(secret.as_bytes()),
    )
    .into_bytes()
}

fn encode_secret_hex(secret: &[u8; API_TOKEN_SECRET_BYTES]) -> String {
    secret.iter().fold(
        String::with_capacity(API_TOKEN_SECRET_HEX_CHARS),
        |mut encoded, byte| {
            use fmt::Write as _;

            // Writing into a String cannot fail.
            let _ = write!(encoded, "{byte:02x}");

            encoded
        },
    )
}

fn decode_secret_hex(secret_hex: &str) -> Option<[u8; API_TOKEN_SECRET_BYTES]> {
    if secret_hex.len() != API_TOKEN_SECRET_HEX_CHARS
        || !secret_hex.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }

    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    for (slot, pair) in secret
        .iter_mut()
        .zip(secret_hex.as_bytes().chunks_exact(2))
    {
        let digits = std::str::from_utf8(pair).ok()?;

        *slot = u8::from_str_radix(digits, 16).ok()?;
    }

    Some(secret)
}
