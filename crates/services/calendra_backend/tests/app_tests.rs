use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use calendra_backend::{build_app, AppState};
use calendra_config::AppConfig;
use calendra_db::MemoryRepositoryFactory;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::with_repositories(
        Arc::new(AppConfig::default()),
        Arc::new(MemoryRepositoryFactory::new()),
    );
    build_app(&state).unwrap()
}

fn next_monday() -> NaiveDate {
    let today = Utc::now().date_naive();
    let until_monday = (7 - today.weekday().num_days_from_monday()) % 7;
    today + Duration::days(i64::from(until_monday) + 7)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_is_nested_under_api() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "ok");

    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_event_type_then_book_a_slot() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/event-types",
        Some(json!({ "title": "Quick Chat", "length": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();

    let day = next_monday();
    let uri = format!(
        "/api/slots/available?startTime={day}&endTime={day}&eventTypeSlug=quick-chat"
    );
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let slots = body["data"]["slots"][&day.to_string()].as_array().unwrap();
    assert_eq!(slots.len(), 16);

    let (status, _) = send(
        &app,
        "POST",
        "/api/bookings",
        Some(json!({
            "eventTypeId": id,
            "start": format!("{day}T09:00:00Z"),
            "attendeeName": "Ada",
            "attendeeEmail": "ada@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", &uri, None).await;
    let slots = body["data"]["slots"][&day.to_string()].as_array().unwrap();
    assert_eq!(slots.len(), 15);
}

#[tokio::test]
async fn test_unknown_event_type_is_not_found() {
    let app = app();
    let day = next_monday();
    let uri = format!("/api/custom/slots/available?startTime={day}&endTime={day}&eventTypeId=99");
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}
