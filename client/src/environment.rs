//! Client environment module.
//!
//! This module declares the configuration record the client reads at
//! startup: the build mode, the backend API server URL, and the identity
//! provider parameters used by the login flow.
//!
//! # Variants
//!
//! - `DEVELOPMENT`: active by default.
//! - `PRODUCTION`: active when the crate is built with `--features production`.
//!
//! # Invariants
//!
//! - Every string field is non-empty.
//! - The active record is a `static` and is never mutated.
//! - Exactly one record is active per build.

/// Identity provider parameters.
///
/// Read by the authentication layer to build the login redirect and to
/// check the audience and issuer of access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityProvider {
    /// Tenant prefix of the identity provider host (`{domain}.auth0.com`).
    pub domain: &'static str,
    /// Identifier of the protected API that issued tokens are valid for.
    pub audience: &'static str,
    /// Public identifier issued to this application by the identity provider.
    pub client_id: &'static str,
    /// URL the identity provider redirects to after authentication.
    pub callback_url: &'static str,
}

/// Client configuration record.
///
/// # Post-conditions
///
/// - `api_server_url` has no trailing slash.
/// - All fields are populated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// Whether this is a production build.
    pub production: bool,
    /// Root URL of the backend API server.
    pub api_server_url: &'static str,
    /// Identity provider parameters for the login flow.
    pub identity_provider: IdentityProvider,
}

/// Development record: local API server and local callback.
pub const DEVELOPMENT: Environment = Environment {
    production: false,
    api_server_url: "http://127.0.0.1:5000",
    identity_provider: IdentityProvider {
        domain: "markrofail.eu",
        audience: "coffee-shop-api",
        client_id: "6u0apLVKIEMcPh0XBtWQWQPHfA84wLI0",
        callback_url: "http://localhost:8100",
    },
};

/// Production record.
pub const PRODUCTION: Environment = Environment {
    production: true,
    ..DEVELOPMENT
};

#[cfg(not(feature = "production"))]
static ENVIRONMENT: Environment = DEVELOPMENT;

#[cfg(feature = "production")]
static ENVIRONMENT: Environment = PRODUCTION;

/// Returns the record active for this build.
///
/// Every call returns the same reference.
#[must_use]
pub fn environment() -> &'static Environment {
    &ENVIRONMENT
}

impl Environment {
    /// Human readable build mode.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        if self.production {
            "production"
        } else {
            "development"
        }
    }

    /// Log the record once at startup.
    pub fn log_summary(&self) {
        tracing::info!(
            mode = self.mode(),
            api_server_url = self.api_server_url,
            identity_provider = self.identity_provider.domain,
            audience = self.identity_provider.audience,
            client_id = self.identity_provider.client_id,
            callback_url = self.identity_provider.callback_url,
            "loaded client environment"
        );
    }
}
