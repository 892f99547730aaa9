//! Drinks API client.
//!
//! # Pre-conditions
//! - The base URL points at a running drinks backend.
//! - Tokens passed to authenticated calls are raw access tokens (no `Bearer ` prefix).
//!
//! # Post-conditions
//! - A successful call returns the decoded payload of a `success: true` envelope.
//! - Backend error envelopes surface as `ApiError::Status`.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::drinks::{
    DeleteEnvelope, Drink, DrinkEnvelope, DrinkPatch, DrinksEnvelope, ErrorEnvelope, NewDrink,
};
use super::endpoint;
use crate::environment::Environment;

/// Error returned when an API call fails.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    Request(reqwest::Error),
    /// The backend answered with a non-success status.
    Status { status: u16, message: String },
    /// The backend answered 2xx but reported `success: false` or an empty result.
    Unsuccessful,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(e) => write!(f, "request failed: {e}"),
            Self::Status { status, message } => write!(f, "backend returned {status}: {message}"),
            Self::Unsuccessful => write!(f, "backend reported an unsuccessful response"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            Self::Status { .. } | Self::Unsuccessful => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

/// Client for the drinks backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the environment's API server.
    #[must_use]
    pub fn new(environment: &Environment) -> Self {
        Self::with_base_url(environment.api_server_url)
    }

    /// Create a client for an explicit base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        endpoint::join(&self.base_url, path)
    }

    /// `GET /drinks` (public, brief recipes).
    pub async fn get_drinks(&self) -> Result<Vec<Drink>, ApiError> {
        let request = self.http.get(self.url("drinks"));
        let envelope: DrinksEnvelope = send(request).await?;
        ensure_success(envelope.success)?;
        Ok(envelope.drinks)
    }

    /// `GET /drinks-detail` (requires `get:drinks-detail`).
    pub async fn get_drinks_detail(&self, token: &str) -> Result<Vec<Drink>, ApiError> {
        let request = self.http.get(self.url("drinks-detail")).bearer_auth(token);
        let envelope: DrinksEnvelope = send(request).await?;
        ensure_success(envelope.success)?;
        Ok(envelope.drinks)
    }

    /// `GET /drinks/{id}` (requires `get:drinks-detail`).
    pub async fn get_drink(&self, id: u32, token: &str) -> Result<Drink, ApiError> {
        let request = self
            .http
            .get(self.url(&format!("drinks/{id}")))
            .bearer_auth(token);
        let envelope: DrinkEnvelope = send(request).await?;
        ensure_success(envelope.success)?;
        Ok(envelope.drink)
    }

    /// `POST /drinks` (requires `post:drinks`).
    pub async fn create_drink(&self, drink: &NewDrink, token: &str) -> Result<Drink, ApiError> {
        let request = self
            .http
            .post(self.url("drinks"))
            .bearer_auth(token)
            .json(drink);
        let envelope: DrinksEnvelope = send(request).await?;
        single_drink(envelope)
    }

    /// `PATCH /drinks/{id}` (requires `patch:drinks`).
    pub async fn update_drink(
        &self,
        id: u32,
        patch: &DrinkPatch,
        token: &str,
    ) -> Result<Drink, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("drinks/{id}")))
            .bearer_auth(token)
            .json(patch);
        let envelope: DrinksEnvelope = send(request).await?;
        single_drink(envelope)
    }

    /// `DELETE /drinks/{id}/` (requires `delete:drinks`).
    ///
    /// Returns the id of the deleted drink.
    pub async fn delete_drink(&self, id: u32, token: &str) -> Result<u32, ApiError> {
        let request = self
            .http
            .delete(self.url(&format!("drinks/{id}/")))
            .bearer_auth(token);
        let envelope: DeleteEnvelope = send(request).await?;
        ensure_success(envelope.success)?;
        Ok(envelope.delete)
    }
}

/// Send a request and decode a success envelope.
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    tracing::debug!(url = %response.url(), status = %response.status(), "api response");

    if !response.status().is_success() {
        return Err(status_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Convert a non-success response into `ApiError::Status`.
///
/// Uses the backend's error envelope message when the body has one, and the
/// canonical reason phrase otherwise.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    tracing::warn!(status = status.as_u16(), %message, "api request failed");

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

fn ensure_success(success: bool) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Unsuccessful)
    }
}

/// Create and update answer with a one-element `drinks` array.
fn single_drink(envelope: DrinksEnvelope) -> Result<Drink, ApiError> {
    ensure_success(envelope.success)?;
    envelope.drinks.into_iter().next().ok_or(ApiError::Unsuccessful)
}
