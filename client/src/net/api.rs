//! REST client for the roadmap resource.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! Each call issues exactly one request. There is no caching, deduplication
//! or retry; callers decide what to do with a failed `Result`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use roadmaps::{ApiError, NewRoadmap, ROADMAPS_PATH, Roadmap, join_url, roadmap_path};

/// Handle to the roadmap resource. Constructed once by the root view and
/// passed explicitly to the views that need it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoadmapClient {
    /// Origin prefix; empty means same-origin requests.
    base_url: String,
}

impl RoadmapClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn collection_url(&self) -> String {
        join_url(&self.base_url, ROADMAPS_PATH)
    }

    #[must_use]
    pub fn item_url(&self, id: &str) -> String {
        join_url(&self.base_url, &roadmap_path(id))
    }

    /// `POST /api/roadmaps`: persist a draft and return the stored roadmap.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or decode failure unchanged.
    pub async fn create(&self, draft: &NewRoadmap) -> Result<Roadmap, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.collection_url())
                .json(draft)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            decode(resp, ROADMAPS_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/roadmaps`: every roadmap, in the order the resource returns.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or decode failure unchanged.
    pub async fn list(&self) -> Result<Vec<Roadmap>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.collection_url())
                .send()
                .await
                .map_err(transport_error)?;
            decode(resp, ROADMAPS_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/roadmaps/{id}`: one roadmap.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, otherwise the
    /// transport, status or decode failure unchanged.
    pub async fn get(&self, id: &str) -> Result<Roadmap, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.item_url(id))
                .send()
                .await
                .map_err(transport_error)?;
            decode(resp, &roadmap_path(id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    path: &str,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), path, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
