//! Login session state.
//!
//! # Invariants
//! - `token` and `claims` are either both set or both empty.
//! - A stored token decoded successfully against the session's provider.

use super::Permission;
use super::fragment::access_token_from_url;
use super::login::{LoginLinkError, build_login_link};
use super::token::{Claims, TokenError, decode_claims};
use crate::environment::{Environment, IdentityProvider};

/// Authentication state of one client.
#[derive(Debug, Clone)]
pub struct AuthSession {
    provider: IdentityProvider,
    token: Option<String>,
    claims: Option<Claims>,
}

impl AuthSession {
    /// Create a logged out session for the environment's identity provider.
    #[must_use]
    pub const fn new(environment: &Environment) -> Self {
        Self {
            provider: environment.identity_provider,
            token: None,
            claims: None,
        }
    }

    #[must_use]
    pub const fn provider(&self) -> &IdentityProvider {
        &self.provider
    }

    /// Link that starts the login flow.
    pub fn login_link(&self, callback_path: &str) -> Result<String, LoginLinkError> {
        build_login_link(&self.provider, callback_path)
    }

    /// Handle the redirect back from the identity provider.
    ///
    /// Returns `Ok(true)` when the redirect carried a token and it was
    /// accepted, and `Ok(false)` when the redirect carried no token (the
    /// session is left unchanged).
    ///
    /// # Errors
    /// Returns `TokenError` if the carried token is rejected.
    pub fn handle_redirect(&mut self, redirect_url: &str) -> Result<bool, TokenError> {
        let Some(token) = access_token_from_url(redirect_url) else {
            tracing::debug!("redirect carried no access token");
            return Ok(false);
        };
        self.set_token(token)?;
        Ok(true)
    }

    /// Store `token` after decoding its claims.
    ///
    /// A rejected token logs the session out.
    ///
    /// # Errors
    /// Returns `TokenError` if the token is rejected.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), TokenError> {
        let token = token.into();
        match decode_claims(&token, &self.provider) {
            Ok(claims) => {
                tracing::info!(
                    sub = claims.sub.as_deref().unwrap_or("unknown"),
                    permissions = claims.permissions.len(),
                    "logged in"
                );
                self.token = Some(token);
                self.claims = Some(claims);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("rejected access token: {e}");
                self.logout();
                Err(e)
            }
        }
    }

    /// The stored access token, if logged in.
    #[must_use]
    pub fn active_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub const fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the logged in user holds `permission`. False when logged out.
    #[must_use]
    pub fn can(&self, permission: Permission) -> bool {
        self.claims
            .as_ref()
            .is_some_and(|claims| claims.has_permission(permission))
    }

    /// Forget the token and its claims.
    pub fn logout(&mut self) {
        if self.token.take().is_some() {
            tracing::info!("logged out");
        }
        self.claims = None;
    }
}
