//! HTTP client layer.
//!
//! Reads `api_server_url` from the active environment and talks to the
//! drinks backend.
//!
//! # Invariants
//! - Every request URL is `{api_server_url}/{path}`.
//! - Authenticated requests carry the access token as a bearer header.

pub mod client;
pub mod drinks;
pub mod endpoint;

pub use client::{ApiClient, ApiError};
pub use drinks::{Drink, DrinkPatch, Ingredient, NewDrink};
