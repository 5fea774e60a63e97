//! Roadmap REST routes.
//!
//! `POST /api/roadmaps`, `GET /api/roadmaps`, `GET /api/roadmaps/{id}`.
//! Failures answer `{"error": "..."}` so clients can show the reason.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::Json;
use roadmaps::{ErrorBody, NewRoadmap, Roadmap};
use serde::Deserialize;
use tracing::{error, warn};

use crate::services::roadmap::{self, RoadmapError};
use crate::state::AppState;

type ErrorResponse = (StatusCode, Json<ErrorBody>);

/// Body of `POST /api/roadmaps`. Both fields are optional on the wire so a
/// missing title gets the same 400 as an empty one.
#[derive(Deserialize)]
pub struct CreateRoadmapBody {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<CreateRoadmapBody> for NewRoadmap {
    fn from(body: CreateRoadmapBody) -> Self {
        Self { title: body.title.unwrap_or_default(), description: body.description.unwrap_or_default() }
    }
}

/// `POST /api/roadmaps`: create a roadmap.
pub async fn create_roadmap(
    State(state): State<AppState>,
    body: Result<Json<CreateRoadmapBody>, JsonRejection>,
) -> Result<(StatusCode, [(axum::http::HeaderName, String); 1], Json<Roadmap>), ErrorResponse> {
    let Json(body) = body.map_err(json_rejection_to_response)?;
    let record = roadmap::create_roadmap(&state, body.into())
        .await
        .map_err(roadmap_error_to_response)?;
    let created = Roadmap::from(record);
    let location = roadmaps::roadmap_path(&created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// `GET /api/roadmaps`: list every roadmap.
pub async fn list_roadmaps(State(state): State<AppState>) -> Result<Json<Vec<Roadmap>>, ErrorResponse> {
    let records = roadmap::list_roadmaps(&state)
        .await
        .map_err(roadmap_error_to_response)?;
    Ok(Json(records.into_iter().map(Roadmap::from).collect()))
}

/// `GET /api/roadmaps/{id}`: fetch one roadmap.
pub async fn get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Roadmap>, ErrorResponse> {
    let record = roadmap::get_roadmap(&state, &id)
        .await
        .map_err(roadmap_error_to_response)?;
    Ok(Json(Roadmap::from(record)))
}

pub(crate) fn roadmap_error_to_status(err: &RoadmapError) -> StatusCode {
    match err {
        RoadmapError::Invalid(_) => StatusCode::BAD_REQUEST,
        RoadmapError::NotFound(_) => StatusCode::NOT_FOUND,
        RoadmapError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Any body the JSON extractor refuses is a 400 carrying its message.
fn json_rejection_to_response(rejection: JsonRejection) -> ErrorResponse {
    warn!(status = %rejection.status(), error = %rejection, "rejected roadmap body");
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(rejection.body_text())))
}

fn roadmap_error_to_response(err: RoadmapError) -> ErrorResponse {
    let status = roadmap_error_to_status(&err);
    let message = match &err {
        RoadmapError::Invalid(e) => e.to_string(),
        RoadmapError::NotFound(_) => "Not found".to_owned(),
        RoadmapError::Storage(e) => {
            error!(error = %e, "roadmap storage failure");
            "Internal error".to_owned()
        }
    };
    (status, Json(ErrorBody::new(message)))
}

#[cfg(test)]
#[path = "roadmaps_test.rs"]
mod tests;
