//! REST API helpers for the voyage endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since the page
//! only fetches after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The error's `Display` is the text
//! shown to the user, so mutation handlers can pass it straight to a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{UnitType, Voyage, VoyageDraft};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;

/// Fallback text when a failed create carries no usable `message`.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create voyage";

/// Text for any failed delete.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete voyage";

pub const VOYAGES_RESOURCE: &str = "voyage/getAll";
pub const UNIT_TYPES_RESOURCE: &str = "unitType/getAll";

/// Failure of a voyage API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn resource_endpoint(resource: &str) -> String {
    format!("/api/{}", resource.trim_start_matches('/'))
}

/// Pull `message` out of an error body, falling back when the body is not
/// JSON or the message is missing/empty.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(resource: &str, status: u16) -> String {
    format!("fetching {resource} failed: {status}")
}

/// `GET /api/<resource>` and decode the JSON body.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or a body that
/// does not decode into `T`.
pub async fn fetch_data<T: DeserializeOwned>(resource: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = resource_endpoint(resource);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                message: fetch_failed_message(resource, resp.status()),
            });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = resource;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every voyage with its vessel and unit types.
///
/// # Errors
///
/// See [`fetch_data`].
pub async fn fetch_voyages() -> Result<Vec<Voyage>, ApiError> {
    fetch_data(VOYAGES_RESOURCE).await
}

/// Fetch the unit-type reference list.
///
/// # Errors
///
/// See [`fetch_data`].
pub async fn fetch_unit_types() -> Result<Vec<UnitType>, ApiError> {
    fetch_data(UNIT_TYPES_RESOURCE).await
}

/// Create a voyage via `POST /api/voyage/create`.
///
/// # Errors
///
/// Non-2xx responses become `ApiError::Status` carrying the body's `message`
/// or [`CREATE_FAILED_MESSAGE`].
pub async fn create_voyage(draft: &VoyageDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/voyage/create")
            .json(draft)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message: error_message_from_body(&body, CREATE_FAILED_MESSAGE) });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Delete a voyage via `DELETE /api/voyage/delete?id=<id>`.
///
/// # Errors
///
/// Any non-2xx response becomes `ApiError::Status` with
/// [`DELETE_FAILED_MESSAGE`].
pub async fn delete_voyage(voyage_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete("/api/voyage/delete")
            .query([("id", voyage_id)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), message: DELETE_FAILED_MESSAGE.to_owned() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = voyage_id;
        Err(ApiError::Unavailable)
    }
}
