//! Identity provider endpoints derived from the environment.

use crate::environment::IdentityProvider;

impl IdentityProvider {
    /// Host of the identity provider tenant.
    #[must_use]
    pub fn host(&self) -> String {
        format!("{}.auth0.com", self.domain)
    }

    /// Expected `iss` claim of issued tokens.
    #[must_use]
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.host())
    }

    /// Key set the backend verifies token signatures against.
    #[must_use]
    pub fn jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.issuer())
    }

    /// Redirect target after login: the callback URL plus an optional path.
    #[must_use]
    pub fn redirect_uri(&self, callback_path: &str) -> String {
        format!("{}{callback_path}", self.callback_url)
    }
}
