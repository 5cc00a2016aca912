//! End-to-end smoke tests for the full minijournald stack.
//!
//! Each test spins up the complete application (temp-dir JSON file, real
//! repository, real service, real axum router) and exercises the HTTP layer
//! via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use minijournal_adapter_http_axum::router;
use minijournal_adapter_http_axum::state::AppState;
use minijournal_adapter_storage_jsonfile::JsonFileEntryRepository;
use minijournal_app::services::entry_service::EntryService;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a fully-wired router backed by a JSON file under `path`.
fn app_at(path: &Path) -> axum::Router {
    let repo = JsonFileEntryRepository::new(path);
    let state = AppState::new(EntryService::new(repo));
    router::build(state)
}

/// Build a fully-wired router in a fresh temp dir.
///
/// The [`TempDir`] guard is returned so the backing file outlives the test.
fn app() -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let router = app_at(&dir.path().join("journal_entries.json"));
    (router, dir)
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

async fn post_entry(app: &axum::Router, name: &str, message: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/entries")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "name": name, "message": message }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _dir) = app();

    let resp = get(&app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: entry CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_empty_journal() {
    let (app, _dir) = app();

    let resp = get(&app, "/api/entries").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_create_first_entry_with_id_one() {
    let (app, _dir) = app();

    let resp = post_entry(&app, "Alex", "Hello").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created = body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Alex");
    assert_eq!(created["message"], "Hello");
    assert!(created["timestamp"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(created["date"].as_str().is_some_and(|s| !s.is_empty()));

    let listed = body_json(get(&app, "/api/entries").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], 1);
}

#[tokio::test]
async fn should_list_newest_entry_first() {
    let (app, _dir) = app();
    post_entry(&app, "Alex", "First").await;
    post_entry(&app, "Sarah", "Second").await;

    let listed = body_json(get(&app, "/api/entries").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[0]["id"], 2);
    assert_eq!(listed[0]["message"], "Second");
    assert_eq!(listed[1]["id"], 1);
}

#[tokio::test]
async fn should_trim_whitespace_on_create() {
    let (app, _dir) = app();

    let created = body_json(post_entry(&app, "  Alex  ", "  Hello  ").await).await;
    assert_eq!(created["name"], "Alex");
    assert_eq!(created["message"], "Hello");
}

#[tokio::test]
async fn should_reject_create_when_name_missing() {
    let (app, _dir) = app();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/entries")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message":"Hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Name and message are required");
}

#[tokio::test]
async fn should_reject_create_when_message_blank() {
    let (app, _dir) = app();

    let resp = post_entry(&app, "Alex", "   ").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_not_persist_rejected_entry() {
    let (app, _dir) = app();
    post_entry(&app, "", "Hello").await;

    let listed = body_json(get(&app, "/api/entries").await).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn should_delete_entry_and_confirm() {
    let (app, _dir) = app();
    post_entry(&app, "Alex", "Hello").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/entries/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Entry deleted successfully");

    let listed = body_json(get(&app, "/api/entries").await).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn should_succeed_when_deleting_nonexistent_id() {
    let (app, _dir) = app();
    post_entry(&app, "Alex", "Hello").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/entries/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let listed = body_json(get(&app, "/api/entries").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// API: statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_stats_for_todays_entries() {
    let (app, _dir) = app();
    for i in 0..3 {
        post_entry(&app, "Alex", &format!("Entry {i}")).await;
    }

    let stats = body_json(get(&app, "/api/stats").await).await;
    assert_eq!(stats["total_entries"], 3);
    assert_eq!(stats["today_entries"], 3);
    assert_eq!(stats["streak_days"], 3);
}

#[tokio::test]
async fn should_cap_streak_days_at_seven() {
    let (app, _dir) = app();
    for i in 0..10 {
        post_entry(&app, "Alex", &format!("Entry {i}")).await;
    }

    let stats = body_json(get(&app, "/api/stats").await).await;
    assert_eq!(stats["total_entries"], 10);
    assert_eq!(stats["today_entries"], 10);
    assert_eq!(stats["streak_days"], 7);
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_export_entries_with_envelope() {
    let (app, _dir) = app();
    post_entry(&app, "Alex", "First").await;
    post_entry(&app, "Sarah", "Second").await;

    let resp = get(&app, "/export").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["total_entries"], 2);
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    assert_eq!(body["entries"][0]["id"], 2);
    assert!(body["export_date"].as_str().is_some_and(|s| s.contains('T')));
}

// ---------------------------------------------------------------------------
// Persistence on disk
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_persist_pretty_printed_json_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal_entries.json");
    let app = app_at(&path);

    post_entry(&app, "Alex", "Hello").await;

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("[\n  {"));
    assert!(raw.contains("\"name\": \"Alex\""));
}

#[tokio::test]
async fn should_reload_entries_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal_entries.json");

    let first = app_at(&path);
    post_entry(&first, "Alex", "Hello").await;
    drop(first);

    let second = app_at(&path);
    let listed = body_json(get(&second, "/api/entries").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Alex");
}
