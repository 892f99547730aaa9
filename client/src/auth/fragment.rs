//! Access token extraction from the identity provider redirect.
//!
//! After login the provider redirects to the callback URL with the token in
//! the fragment: `http://localhost:8100/#access_token=...&expires_in=7200`.

use url::Url;

/// Returns the `access_token` carried in the fragment of `redirect_url`.
///
/// Returns `None` when the URL does not parse, has no fragment, or the
/// fragment carries no non-empty `access_token`.
#[must_use]
pub fn access_token_from_url(redirect_url: &str) -> Option<String> {
    let url = Url::parse(redirect_url).ok()?;
    access_token_from_fragment(url.fragment()?)
}

/// Returns the `access_token` of a fragment (without the leading `#`).
#[must_use]
pub fn access_token_from_fragment(fragment: &str) -> Option<String> {
    url::form_urlencoded::parse(fragment.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}
