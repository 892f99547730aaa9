//! Login redirect construction.
//!
//! # Pre-conditions
//! - `callback_path` is either empty or starts with `/`.
//!
//! # Post-conditions
//! - The link targets `https://{domain}.auth0.com/authorize` and requests an
//!   access token (`response_type=token`) for the configured audience.

use url::Url;

use crate::environment::IdentityProvider;

/// Error returned when the login link cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginLinkError {
    /// The identity provider host does not form a valid URL.
    InvalidUrl(String),
}

impl std::fmt::Display for LoginLinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl(reason) => write!(f, "invalid login url: {reason}"),
        }
    }
}

impl std::error::Error for LoginLinkError {}

/// Builds the identity provider's authorize link.
///
/// Query values are form-urlencoded. The redirect is the provider's
/// `callback_url` followed by `callback_path`.
pub fn build_login_link(
    provider: &IdentityProvider,
    callback_path: &str,
) -> Result<String, LoginLinkError> {
    let authorize = format!("https://{}/authorize", provider.host());
    let mut link =
        Url::parse(&authorize).map_err(|e| LoginLinkError::InvalidUrl(e.to_string()))?;

    link.query_pairs_mut()
        .append_pair("audience", provider.audience)
        .append_pair("response_type", "token")
        .append_pair("client_id", provider.client_id)
        .append_pair("redirect_uri", &provider.redirect_uri(callback_path));

    Ok(link.into())
}
