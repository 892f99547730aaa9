//! Authentication module.
//!
//! This module integrates the client with the identity provider described by
//! the active environment: it builds the login redirect, picks the access
//! token out of the redirect back, and answers permission checks from the
//! token's claims.
//!
//! # Pre-conditions
//! - The identity provider parameters of the environment are non-empty.
//!
//! # Post-conditions
//! - A session only holds a token whose claims decoded successfully.
//!
//! # Invariants
//! - Token signatures are verified by the backend, never by the client.

pub mod fragment;
pub mod login;
pub mod permission;
pub mod provider;
pub mod session;
pub mod token;

pub use login::{LoginLinkError, build_login_link};
pub use permission::Permission;
pub use session::AuthSession;
pub use token::{Audience, Claims, TokenError, decode_claims};
