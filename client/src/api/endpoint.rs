//! Request URL construction.

/// Joins the API base URL and a request path with exactly one `/`.
///
/// An empty path yields the base URL unchanged.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}
