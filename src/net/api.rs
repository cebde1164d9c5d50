//! REST client for the cage and area endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with a network error,
//! since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call issues exactly one request and maps its outcome onto
//! [`ApiError`]. Nothing is retried here; callers decide what to surface.
//! A 2xx mutation always succeeds: its body only supplies the feedback text,
//! and an empty or unreadable body falls back to a fixed message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Area, Cage, CagePayload};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
const CREATED_MESSAGE: &str = "Cage created";
#[cfg(any(test, feature = "hydrate"))]
const UPDATED_MESSAGE: &str = "Cage updated";
#[cfg(any(test, feature = "hydrate"))]
const DELETED_MESSAGE: &str = "Cage deleted";

/// Remote cage store. Mutations resolve to the server's feedback message.
#[async_trait::async_trait(?Send)]
pub trait CageApi {
    /// Fetch every cage.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    async fn list_cages(&self) -> Result<Vec<Cage>, ApiError>;

    /// Fetch every area.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    async fn list_areas(&self) -> Result<Vec<Area>, ApiError>;

    /// Create a cage from a validated payload.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server rejects it.
    async fn create_cage(&self, payload: &CagePayload) -> Result<String, ApiError>;

    /// Update the cage identified by `payload.id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server rejects it.
    async fn update_cage(&self, payload: &CagePayload) -> Result<String, ApiError>;

    /// Delete a cage by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server rejects it.
    async fn delete_cage(&self, cage_id: i64) -> Result<String, ApiError>;
}

/// [`CageApi`] over HTTP against the configured backend.
#[derive(Clone, Debug)]
pub struct HttpCageApi {
    base_url: String,
}

impl HttpCageApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone() }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn cages_list_endpoint(base: &str) -> String {
    format!("{base}/animalCage/getAllAnimalCage")
}

#[cfg(any(test, feature = "hydrate"))]
fn area_list_endpoint(base: &str) -> String {
    format!("{base}/area/all")
}

#[cfg(any(test, feature = "hydrate"))]
fn cage_create_endpoint(base: &str) -> String {
    format!("{base}/animalCage/createNewAnimalCage")
}

#[cfg(any(test, feature = "hydrate"))]
fn cage_update_endpoint(base: &str) -> String {
    format!("{base}/animalCage/updateAnimalCage")
}

#[cfg(any(test, feature = "hydrate"))]
fn cage_delete_endpoint(base: &str, cage_id: i64) -> String {
    format!("{base}/animalCage/deleteAnimalCage/{cage_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn feedback_message(message: Option<String>, fallback: &str) -> String {
    message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Feedback text from a successful mutation's raw body.
#[cfg(any(test, feature = "hydrate"))]
fn mutation_message(body: &str, fallback: &str) -> String {
    let message = serde_json::from_str::<super::types::MessageResponse>(body).ok().and_then(|b| b.message);
    feedback_message(message, fallback)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Payload(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_message(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
    fallback: &str,
) -> Result<String, ApiError> {
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let body = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::from_response(resp.status(), &body));
    }
    Ok(mutation_message(&body, fallback))
}

#[cfg(feature = "hydrate")]
fn json_request(
    builder: gloo_net::http::RequestBuilder,
    payload: &CagePayload,
) -> Result<gloo_net::http::Request, ApiError> {
    builder.json(payload).map_err(|e| ApiError::Payload(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl CageApi for HttpCageApi {
    async fn list_cages(&self) -> Result<Vec<Cage>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = cages_list_endpoint(&self.base_url);
            let body: super::types::CatalogueResponse =
                read_json(gloo_net::http::Request::get(&url).send().await).await?;
            Ok(body.catalogue_dto)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    async fn list_areas(&self) -> Result<Vec<Area>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = area_list_endpoint(&self.base_url);
            let body: super::types::AreaListResponse =
                read_json(gloo_net::http::Request::get(&url).send().await).await?;
            Ok(body.area)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    async fn create_cage(&self, payload: &CagePayload) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = cage_create_endpoint(&self.base_url);
            let request = json_request(gloo_net::http::Request::post(&url), payload)?;
            read_message(request.send().await, CREATED_MESSAGE).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(unavailable())
        }
    }

    async fn update_cage(&self, payload: &CagePayload) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = cage_update_endpoint(&self.base_url);
            let request = json_request(gloo_net::http::Request::put(&url), payload)?;
            read_message(request.send().await, UPDATED_MESSAGE).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(unavailable())
        }
    }

    async fn delete_cage(&self, cage_id: i64) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = cage_delete_endpoint(&self.base_url, cage_id);
            read_message(gloo_net::http::Request::delete(&url).send().await, DELETED_MESSAGE).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cage_id;
            Err(unavailable())
        }
    }
}
