//! Native REST client for the roadmap resource.
//!
//! Same contract as the browser client: one request per call, failures
//! classified into [`ApiError`] and returned unchanged.

use roadmaps::{ApiError, NewRoadmap, ROADMAPS_PATH, Roadmap, join_url, roadmap_path};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct RoadmapClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoadmapClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let resp = self.http.get(self.url("/healthz")).send().await.map_err(transport_error)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), "/healthz", &body));
        }
        Ok(())
    }

    /// `POST /api/roadmaps`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or decode failure unchanged.
    pub async fn create(&self, draft: &NewRoadmap) -> Result<Roadmap, ApiError> {
        let resp = self
            .http
            .post(self.url(ROADMAPS_PATH))
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        decode(resp, ROADMAPS_PATH).await
    }

    /// `GET /api/roadmaps`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or decode failure unchanged.
    pub async fn list(&self) -> Result<Vec<Roadmap>, ApiError> {
        let resp = self.http.get(self.url(ROADMAPS_PATH)).send().await.map_err(transport_error)?;
        decode(resp, ROADMAPS_PATH).await
    }

    /// `GET /api/roadmaps/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, otherwise the
    /// transport, status or decode failure unchanged.
    pub async fn get(&self, id: &str) -> Result<Roadmap, ApiError> {
        let path = roadmap_path(id);
        let resp = self.http.get(self.url(&path)).send().await.map_err(transport_error)?;
        decode(resp, &path).await
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response, path: &str) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), path, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
