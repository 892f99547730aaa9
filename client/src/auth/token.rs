//! Access token claim decoding.
//!
//! The client reads the claims of its access token to decide which actions to
//! offer. It does not hold the provider's signing keys, so signatures are not
//! checked here; the backend verifies them on every request.
//!
//! # Post-conditions
//! - On success the token is unexpired and was issued by the configured
//!   provider for the configured audience.

use jsonwebtoken::dangerous::insecure_decode;
use jsonwebtoken::get_current_timestamp;
use serde::{Deserialize, Serialize};

use super::Permission;
use crate::environment::IdentityProvider;

/// Clock skew tolerated when checking `exp`, in seconds.
const EXPIRY_LEEWAY_SECONDS: u64 = 60;

/// The `aud` claim: a single audience or a list of them.
///
/// The identity provider issues a list when the token also grants access to
/// its own user info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Audience {
    /// Whether `audience` is one of the token's audiences.
    #[must_use]
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Self::One(value) => value == audience,
            Self::Many(values) => values.iter().any(|value| value == audience),
        }
    }
}

/// Claims the client uses from an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier).
    #[serde(default)]
    pub sub: Option<String>,
    /// Seconds since the Unix epoch after which the token is rejected.
    pub exp: u64,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Claims {
    /// Whether `permission` was granted.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.iter().any(|p| p == permission.as_str())
    }
}

/// Payload as found in the token, before the claim checks.
#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    exp: Option<u64>,
    #[serde(default)]
    aud: Option<Audience>,
    #[serde(default)]
    iss: Option<String>,
    #[serde(default)]
    permissions: Vec<String>,
}

/// Error returned when an access token is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token has expired.
    Expired,
    /// The token was issued for another audience.
    InvalidAudience,
    /// The token was issued by another provider.
    InvalidIssuer,
    /// The token is malformed or cannot be parsed.
    Malformed,
    /// A required claim is missing.
    MissingClaim(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired => write!(f, "access token has expired"),
            Self::InvalidAudience => write!(f, "access token has an invalid audience"),
            Self::InvalidIssuer => write!(f, "access token has an invalid issuer"),
            Self::Malformed => write!(f, "malformed access token"),
            Self::MissingClaim(claim) => write!(f, "missing '{claim}' claim in access token"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Decodes the claims of `token` for `provider`.
///
/// Works for any signing algorithm since the signature is not checked.
/// Checks `exp` (with a small leeway), `aud` against the provider's audience
/// (a string or a list containing it) and `iss` against the provider's issuer.
///
/// # Errors
/// Returns `TokenError` if the token is malformed or a claim check fails.
pub fn decode_claims(token: &str, provider: &IdentityProvider) -> Result<Claims, TokenError> {
    let payload = insecure_decode::<Payload>(token)
        .map_err(|e| {
            tracing::debug!("could not decode access token: {e}");
            TokenError::Malformed
        })?
        .claims;

    let exp = payload.exp.ok_or_else(|| missing("exp"))?;
    if exp.saturating_add(EXPIRY_LEEWAY_SECONDS) < get_current_timestamp() {
        return Err(TokenError::Expired);
    }

    let audience = payload.aud.ok_or_else(|| missing("aud"))?;
    if !audience.contains(provider.audience) {
        return Err(TokenError::InvalidAudience);
    }

    let issuer = payload.iss.ok_or_else(|| missing("iss"))?;
    if issuer != provider.issuer() {
        return Err(TokenError::InvalidIssuer);
    }

    Ok(Claims {
        sub: payload.sub,
        exp,
        permissions: payload.permissions,
    })
}

fn missing(claim: &str) -> TokenError {
    TokenError::MissingClaim(claim.to_string())
}
