//! Test fixtures for the event type API tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use calendra_common::models::{ChildEventType, EventType, SchedulingType, Team};
use calendra_config::AppConfig;
use calendra_db::MemoryEventTypeRepository;
use std::sync::Arc;

pub fn config() -> Arc<AppConfig> {
    Arc::new(AppConfig::default())
}

pub fn repository(event_types: Vec<EventType>) -> Arc<MemoryEventTypeRepository> {
    Arc::new(MemoryEventTypeRepository::with_event_types(event_types))
}

/// A managed parent (id 1) with two children (ids 2 and 3) and a plain
/// personal event type (id 4).
pub fn managed_family() -> Vec<EventType> {
    let mut parent = EventType::new(1, "Onboarding", "onboarding", 30);
    parent.team = Some(Team {
        id: 10,
        name: "Customer Success".to_string(),
    });
    parent.scheduling_type = Some(SchedulingType::Managed);
    parent.children = vec![
        ChildEventType {
            event_type_id: 2,
            owner_name: "Ada".to_string(),
        },
        ChildEventType {
            event_type_id: 3,
            owner_name: "Grace".to_string(),
        },
    ];

    let child = |id: i64| {
        let mut child = EventType::new(id, "Onboarding", format!("onboarding-{}", id), 30);
        child.parent_id = Some(1);
        child
    };

    vec![
        parent,
        child(2),
        child(3),
        EventType::new(4, "Coffee chat", "coffee-chat", 15),
    ]
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
