#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
// Client side of the coffee shop:
//  - environment: the configuration record selected at build time
//  - api: reads `api_server_url` and talks to the drinks backend
//  - auth: reads the identity provider parameters and drives login

pub mod api;
pub mod auth;
pub mod environment;


pub use environment::{Environment, IdentityProvider, environment};
