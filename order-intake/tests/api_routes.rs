//! HTTP contract of the order-intake router, against the in-memory datastore

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono_tz::Tz;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use order_intake::auth::{API_KEY_HEADER, SharedSecret};
use order_intake::db::memory::MemoryStore;
use order_intake::{AppState, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

const KEY: &str = "test-store-key";

fn app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::with_store(store.clone(), Arc::new(SharedSecret::new(KEY)), Tz::UTC);
    (store, create_router(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_store_status(key: &str) -> Request<Body> {
    Request::builder()
        .uri("/store-status")
        .header(API_KEY_HEADER, key)
        .body(Body::empty())
        .unwrap()
}

fn put_store_status(key: &str, body: Value) -> Request<Body> {
    let mut request = json_request("PUT", "/store-status", body);
    request.headers_mut().insert(API_KEY_HEADER, key.parse().unwrap());
    request
}

async fn submit(app: &Router, message: &str) -> Value {
    let request = json_request("POST", "/submit", json!({ "message": message }));
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    body["entry"].clone()
}

async fn put_status(app: &Router, id: impl std::fmt::Display, body: Value) -> (StatusCode, Value) {
    let uri = format!("/entries/{id}/status");
    send(app, json_request("PUT", &uri, body)).await
}

#[tokio::test]
async fn root_reports_running() {
    let (_, app) = app();
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["status"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn submit_round_trip() {
    let (_, app) = app();
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/submit",
            json!({
                "name": "Alice",
                "phoneNumber": "555-1234",
                "message": "2 everything bagels"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let entry = &body["entry"];
    assert_eq!(entry["message"], "2 everything bagels");
    assert_eq!(entry["name"], "Alice");
    assert_eq!(entry["phoneNumber"], "555-1234");
    assert_eq!(entry["status"], "New");
    assert!(entry["orderNumber"].as_i64().unwrap() >= 100);
    assert!(entry["id"].is_i64());
    assert!(entry["created_at"].is_string());
    assert!(entry.get("order_number").is_none());
}

#[tokio::test]
async fn first_submission_of_day_is_100_then_increments() {
    let (_, app) = app();
    assert_eq!(submit(&app, "first").await["orderNumber"], 100);
    assert_eq!(submit(&app, "second").await["orderNumber"], 101);
}

#[tokio::test]
async fn submit_without_message_is_400_and_stores_nothing() {
    let (store, app) = app();

    let request = json_request("POST", "/submit", json!({ "name": "Bob" }));
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = json_request("POST", "/submit", json!({ "message": "" }));
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(store.entry_count().await, 0);
    assert_eq!(submit(&app, "now valid").await["orderNumber"], 100);
}

#[tokio::test]
async fn whitespace_message_and_status_are_accepted() {
    let (_, app) = app();

    let entry = submit(&app, "   ").await;
    assert_eq!(entry["message"], "   ");
    assert_eq!(entry["orderNumber"], 100);

    let (status, body) = put_status(&app, &entry["id"], json!({ "status": " " })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["status"], " ");
}

#[tokio::test]
async fn malformed_body_is_400_with_error_field() {
    let (_, app) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/submit")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn list_filters_by_exact_status_newest_first() {
    let (_, app) = app();
    let first = submit(&app, "one").await;
    let second = submit(&app, "two").await;
    let third = submit(&app, "three").await;

    let (status, _) = put_status(&app, &second["id"], json!({ "status": "Done" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get("/entries")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&Value> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| &e["id"])
        .collect();
    assert_eq!(ids, vec![&third["id"], &second["id"], &first["id"]]);

    let (_, body) = send(&app, get("/entries?status=New")).await;
    let ids: Vec<&Value> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| &e["id"])
        .collect();
    assert_eq!(ids, vec![&third["id"], &first["id"]]);

    let (_, body) = send(&app, get("/entries?status=new")).await;
    assert!(body["entries"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, get("/entries?status=")).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_status_round_trip() {
    let (_, app) = app();
    let entry = submit(&app, "bagel").await;

    let (status, body) = put_status(&app, &entry["id"], json!({ "status": "Picked up" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["entry"]["status"], "Picked up");
    assert_eq!(body["entry"]["orderNumber"], entry["orderNumber"]);
}

#[tokio::test]
async fn update_status_errors() {
    let (_, app) = app();
    let entry = submit(&app, "bagel").await;

    let (status, _) = put_status(&app, &entry["id"], json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = put_status(&app, 9999, json!({ "status": "Done" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = put_status(&app, "abc", json!({ "status": "Done" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, get("/entries")).await;
    assert_eq!(body["entries"][0]["status"], "New");
}

#[tokio::test]
async fn store_status_requires_key() {
    let (store, app) = app();

    let (status, body) = send(&app, get("/store-status")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, get_store_status("wrong")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let request = put_store_status("wrong", json!({ "store_closed": true }));
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let request = Request::builder()
        .method("PUT")
        .uri("/store-status")
        .body(Body::from("garbage"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    assert_eq!(store.store_status_rows().await, 0);
}

#[tokio::test]
async fn wrong_key_cannot_change_existing_store_status() {
    let (_, app) = app();
    let open = json!({ "store_closed": false, "notes": "Open until 3pm" });

    let (status, _) = send(&app, put_store_status(KEY, open.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let request = put_store_status("wrong", json!({ "store_closed": true, "notes": "Closed" }));
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());

    let request = json_request("PUT", "/store-status", json!({ "store_closed": true }));
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = send(&app, get_store_status(KEY)).await;
    assert_eq!(body, open);
}

#[tokio::test]
async fn store_status_lazy_create_and_update() {
    let (store, app) = app();

    let (status, body) = send(&app, get_store_status(KEY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "store_closed": false, "notes": "" }));
    send(&app, get_store_status(KEY)).await;
    assert_eq!(store.store_status_rows().await, 1);

    let closed = json!({ "store_closed": true, "notes": "Closed for inventory" });
    let (status, body) = send(&app, put_store_status(KEY, closed.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], closed);

    let (_, body) = send(&app, get_store_status(KEY)).await;
    assert_eq!(body, closed);
    assert_eq!(store.store_status_rows().await, 1);
}

#[tokio::test]
async fn health_reports_datastore() {
    let (_, app) = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["datastore"], "memory");
}
