use almanac::{AlmanacState, OrganizerStore, almanac_router};
use almanac_schema::{ContactView, OrganizerStateBody};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    almanac_router(AlmanacState::new(Arc::new(OrganizerStore::new())))
}

async fn post_raw(app: &Router, body: impl Into<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                // The UI posts without a JSON content type.
                .header("content-type", "text/plain;charset=UTF-8")
                .body(body.into())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

async fn post_action(app: &Router, payload: Value) -> OrganizerStateBody {
    let (status, body) = post_raw(app, payload.to_string()).await;
    assert_eq!(status, StatusCode::OK, "body: {}", String::from_utf8_lossy(&body));
    serde_json::from_slice(&body).expect("state body was not valid JSON")
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

async fn get_state(app: &Router) -> OrganizerStateBody {
    let (status, body) = get(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).expect("state body was not valid JSON")
}

#[tokio::test]
async fn empty_store_serves_three_empty_lists() {
    let app = app();
    let (status, body) = get(&app, "/api/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        r#"{"contacts":[],"reminders":[],"projects":[]}"#
    );
}

#[tokio::test]
async fn contact_added_then_deleted_with_other_case() {
    let app = app();

    let state = post_action(
        &app,
        json!({ "action": "add_contact", "name": "Jo", "phone": "555", "email": "jo@x.com" }),
    )
    .await;
    assert_eq!(
        state.contacts,
        vec![ContactView {
            name: "Jo".to_string(),
            phone: "555".to_string(),
            email: "jo@x.com".to_string(),
        }]
    );

    let state = post_action(&app, json!({ "action": "delete_contact", "name": "JO" })).await;
    assert!(state.contacts.is_empty());
    assert_eq!(get_state(&app).await, state);
}

#[tokio::test]
async fn overwrite_keeps_a_single_contact() {
    let app = app();
    post_action(
        &app,
        json!({ "action": "add_contact", "name": "Ann", "phone": "1", "email": "a@x.com" }),
    )
    .await;
    let state = post_action(
        &app,
        json!({ "action": "add_contact", "name": "ANN", "phone": "2", "email": "b@x.com" }),
    )
    .await;

    assert_eq!(state.contacts.len(), 1);
    assert_eq!(state.contacts[0].name, "ANN");
    assert_eq!(state.contacts[0].phone, "2");
}

#[tokio::test]
async fn duplicate_reminders_listed_twice_and_removed_together() {
    let app = app();
    let reminder = json!({ "action": "add_reminder", "text": "Call client", "timestamp": 1700000000 });
    post_action(&app, reminder.clone()).await;
    let state = post_action(&app, reminder).await;
    assert_eq!(state.reminders.len(), 2);

    let (_, raw) = get(&app, "/api/data").await;
    let raw: Value = serde_json::from_slice(&raw).expect("state body was not valid JSON");
    assert_eq!(raw["reminders"][0], json!({ "text": "Call client", "time": 1700000000 }));

    let state = post_action(
        &app,
        json!({ "action": "delete_reminder", "text": "Call client", "timestamp": 1700000000.0 }),
    )
    .await;
    assert!(state.reminders.is_empty());
}

#[tokio::test]
async fn reminders_sorted_by_time_and_fractions_survive() {
    let app = app();
    post_action(&app, json!({ "action": "add_reminder", "text": "b", "timestamp": 1700000300 })).await;
    post_action(&app, json!({ "action": "add_reminder", "text": "a", "timestamp": 1700000100.5 })).await;

    let (_, raw) = get(&app, "/api/data").await;
    let raw: Value = serde_json::from_slice(&raw).expect("state body was not valid JSON");
    assert_eq!(raw["reminders"][0], json!({ "text": "a", "time": 1700000100.5 }));
    assert_eq!(raw["reminders"][1], json!({ "text": "b", "time": 1700000300 }));
}

#[tokio::test]
async fn projects_ordered_by_start_date() {
    let app = app();
    post_action(
        &app,
        json!({ "action": "add_project", "name": "Site", "start": "2024-01-01", "end": "2024-03-01" }),
    )
    .await;
    let state = post_action(
        &app,
        json!({ "action": "add_project", "name": "App", "start": "2023-12-01", "end": "2024-02-01" }),
    )
    .await;

    let names: Vec<&str> = state.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["App", "Site"]);

    let state = post_action(
        &app,
        json!({ "action": "delete_project", "name": "App", "start": "2023-12-01" }),
    )
    .await;
    let names: Vec<&str> = state.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Site"]);
}

#[tokio::test]
async fn deleting_missing_items_returns_unchanged_state() {
    let app = app();
    post_action(
        &app,
        json!({ "action": "add_contact", "name": "Ann", "phone": "1", "email": "a@x.com" }),
    )
    .await;
    let before = get_state(&app).await;

    for payload in [
        json!({ "action": "delete_contact", "name": "Nobody" }),
        json!({ "action": "delete_reminder", "text": "nothing", "timestamp": 1 }),
        json!({ "action": "delete_project", "name": "None", "start": "2024-01-01" }),
    ] {
        assert_eq!(post_action(&app, payload).await, before);
    }
}

#[tokio::test]
async fn unrecognized_or_missing_action_is_a_no_op() {
    let app = app();
    post_action(
        &app,
        json!({ "action": "add_contact", "name": "Ann", "phone": "1", "email": "a@x.com" }),
    )
    .await;
    let before = get_state(&app).await;

    assert_eq!(post_action(&app, json!({ "action": "rename_contact", "name": "x" })).await, before);
    assert_eq!(post_action(&app, json!({ "name": "x" })).await, before);
    assert_eq!(post_action(&app, json!({ "action": null })).await, before);
}

#[tokio::test]
async fn missing_field_is_rejected_without_touching_state() {
    let app = app();
    let (status, body) = post_raw(&app, r#"{"action":"add_contact","name":"Jo"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).expect("error body was not JSON");
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["details"]["action"], "add_contact");
    assert!(get_state(&app).await.contacts.is_empty());

    let (status, _) =
        post_raw(&app, r#"{"action":"add_reminder","text":"x","timestamp":"soon"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(get_state(&app).await.reminders.is_empty());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = app();

    for body in ["not-json", "[]", "42", ""] {
        let (status, raw) = post_raw(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        let raw: Value = serde_json::from_slice(&raw).expect("error body was not JSON");
        assert_eq!(raw["error"]["code"], "MALFORMED_BODY");
    }
}

#[tokio::test]
async fn contact_prefix_search_and_exact_lookup() {
    let app = app();
    for name in ["Alice", "Alan", "Bob"] {
        post_action(
            &app,
            json!({ "action": "add_contact", "name": name, "phone": "555", "email": "x@x.com" }),
        )
        .await;
    }

    let (status, body) = get(&app, "/api/contacts?prefix=al").await;
    assert_eq!(status, StatusCode::OK);
    let found: Vec<ContactView> = serde_json::from_slice(&body).expect("contacts were not JSON");
    let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alan", "Alice"]);

    let (_, body) = get(&app, "/api/contacts").await;
    let all: Vec<ContactView> = serde_json::from_slice(&body).expect("contacts were not JSON");
    assert_eq!(all.len(), 3);

    let (status, body) = get(&app, "/api/contacts/bOB").await;
    assert_eq!(status, StatusCode::OK);
    let bob: ContactView = serde_json::from_slice(&body).expect("contact was not JSON");
    assert_eq!(bob.name, "Bob");

    let (status, body) = get(&app, "/api/contacts/Carl").await;
    assert_eq!(status, StatusCode::OK);
    let missing: Option<ContactView> =
        serde_json::from_slice(&body).expect("lookup body was not JSON");
    assert!(missing.is_none());
    assert_eq!(body, b"null");
}

#[tokio::test]
async fn very_long_contact_name_round_trips() {
    let app = app();
    let name = "a".repeat(200_000);

    let state = post_action(
        &app,
        json!({ "action": "add_contact", "name": name, "phone": "555", "email": "x@x.com" }),
    )
    .await;
    assert_eq!(state.contacts.len(), 1);
    assert_eq!(state.contacts[0].name.len(), name.len());

    let (status, body) = get(&app, "/api/contacts?prefix=aaaa").await;
    assert_eq!(status, StatusCode::OK);
    let found: Vec<ContactView> = serde_json::from_slice(&body).expect("contacts were not JSON");
    assert_eq!(found.len(), 1);

    let state = post_action(
        &app,
        json!({ "action": "delete_contact", "name": name.to_uppercase() }),
    )
    .await;
    assert!(state.contacts.is_empty());
    assert!(get_state(&app).await.contacts.is_empty());
}

#[tokio::test]
async fn index_serves_embedded_ui_and_unknown_paths_404() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(resp.headers().contains_key("x-request-id"));
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert!(std::str::from_utf8(&body).unwrap().contains("/api/data"));

    let (status, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_id_is_reflected() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/data")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(
        resp.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-123")
    );
}
