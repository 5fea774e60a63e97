use super::*;
use crate::state::test_helpers;
use crate::store::StoreError;
use serde_json::{Value, json};

/// Serve the API router on an ephemeral port and return its base URL.
async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, crate::routes::app(state)).await.expect("test server");
    });
    format!("http://{addr}")
}

async fn post_roadmap(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}/api/roadmaps"))
        .json(&body)
        .send()
        .await
        .expect("post roadmap")
}

#[test]
fn error_status_mapping() {
    assert_eq!(
        roadmap_error_to_status(&RoadmapError::Invalid(roadmaps::DraftError::MissingTitle)),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(roadmap_error_to_status(&RoadmapError::NotFound("x".into())), StatusCode::NOT_FOUND);
    let storage = RoadmapError::Storage(StoreError::Io(std::io::Error::other("disk")));
    assert_eq!(roadmap_error_to_status(&storage), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn storage_failures_hide_details() {
    let storage = RoadmapError::Storage(StoreError::Io(std::io::Error::other("disk on fire")));
    let (status, Json(body)) = roadmap_error_to_response(storage);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Internal error");
}

#[tokio::test]
async fn create_then_list_includes_exact_record() {
    let base = spawn_app(test_helpers::test_app_state()).await;

    let resp = post_roadmap(&base, json!({"title": "Learn Go", "description": "6 weeks"})).await;
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let location = resp
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
        .expect("location header");
    let created: Roadmap = resp.json().await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Learn Go");
    assert_eq!(created.description, "6 weeks");
    assert_eq!(location, format!("/api/roadmaps/{}", created.id));

    let listed: Vec<Roadmap> = reqwest::get(format!("{base}/api/roadmaps"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.contains(&created));
}

#[tokio::test]
async fn get_returns_created_record() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let created: Roadmap = post_roadmap(&base, json!({"title": "A", "description": "B"}))
        .await
        .json()
        .await
        .unwrap();

    let resp = reqwest::get(format!("{base}/api/roadmaps/{}", created.id)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let fetched: Roadmap = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_missing_id_is_404_with_error_body() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let resp = reqwest::get(format!("{base}/api/roadmaps/missing-id")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: ErrorBody = resp.json().await.unwrap();
    assert_eq!(body.error, "Not found");
}

#[tokio::test]
async fn empty_or_missing_title_is_rejected() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    for body in [json!({"title": "", "description": "x"}), json!({"description": "x"})] {
        let resp = post_roadmap(&base, body).await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let err: ErrorBody = resp.json().await.unwrap();
        assert_eq!(err.error, "Title is required");
    }

    let listed: Vec<Roadmap> = reqwest::get(format!("{base}/api/roadmaps"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn unreadable_bodies_are_400_with_error_body() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/roadmaps");

    let requests = [
        client.post(&url).header(reqwest::header::CONTENT_TYPE, "application/json").body("not json"),
        client.post(&url).json(&json!({"title": 42})),
        client.post(&url).header(reqwest::header::CONTENT_TYPE, "text/plain").body(r#"{"title":"A"}"#),
    ];
    for request in requests {
        let resp = request.send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: ErrorBody = resp.json().await.expect("error body should be JSON");
        assert!(!body.error.is_empty());
    }

    let listed: Vec<Roadmap> = reqwest::get(&url).await.unwrap().json().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn missing_description_defaults_to_empty() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let created: Roadmap = post_roadmap(&base, json!({"title": "Only title"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(created.description, "");
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn list_preserves_creation_order() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let mut ids = Vec::new();
    for title in ["one", "two", "three"] {
        let created: Roadmap = post_roadmap(&base, json!({"title": title})).await.json().await.unwrap();
        ids.push(created.id);
    }
    let listed: Vec<Roadmap> = reqwest::get(format!("{base}/api/roadmaps"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed_ids: Vec<String> = listed.into_iter().map(|r| r.id).collect();
    assert_eq!(listed_ids, ids);
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
