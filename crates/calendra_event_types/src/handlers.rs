// --- File: crates/calendra_event_types/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use calendra_common::models::EventType;
use calendra_common::{ApiResponse, CalendraError};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::seats::{SeatsToggleState, UpdateSeatsRequest};
use crate::service::{CreateEventTypeRequest, EventTypeService};
use crate::tabs::TabsNavigation;

#[derive(Clone)]
pub struct EventTypesState {
    pub service: Arc<EventTypeService>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: i64,
    pub deleted: bool,
}

type HandlerResult<T> = Result<Json<ApiResponse<T>>, CalendraError>;

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/event-types",
    responses(
        (status = 200, description = "All event types", body = ApiResponse<Vec<EventType>>),
        (status = 500, description = "Storage failure")
    ),
    tag = "Event Types"
))]
pub async fn list_event_types_handler(
    State(state): State<Arc<EventTypesState>>,
) -> HandlerResult<Vec<EventType>> {
    Ok(Json(ApiResponse::success(state.service.list().await?)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/event-types/{id}",
    params(("id" = i64, Path, description = "Event type id")),
    responses(
        (status = 200, description = "The event type", body = ApiResponse<EventType>),
        (status = 404, description = "Unknown event type")
    ),
    tag = "Event Types"
))]
pub async fn get_event_type_handler(
    State(state): State<Arc<EventTypesState>>,
    Path(id): Path<i64>,
) -> HandlerResult<EventType> {
    Ok(Json(ApiResponse::success(state.service.get(id).await?)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/event-types",
    request_body = CreateEventTypeRequest,
    responses(
        (status = 201, description = "Event type created", body = ApiResponse<EventType>),
        (status = 400, description = "Invalid title, length or slug"),
        (status = 409, description = "Slug already taken")
    ),
    tag = "Event Types"
))]
pub async fn create_event_type_handler(
    State(state): State<Arc<EventTypesState>>,
    Json(payload): Json<CreateEventTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EventType>>), CalendraError> {
    info!("Creating event type '{}'", payload.title);
    let created = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/event-types/{id}",
    params(("id" = i64, Path, description = "Event type id")),
    responses(
        (status = 200, description = "Event type deleted", body = ApiResponse<DeletedResponse>),
        (status = 404, description = "Unknown event type")
    ),
    tag = "Event Types"
))]
pub async fn delete_event_type_handler(
    State(state): State<Arc<EventTypesState>>,
    Path(id): Path<i64>,
) -> HandlerResult<DeletedResponse> {
    state.service.delete(id).await?;
    Ok(Json(ApiResponse::success(DeletedResponse { id, deleted: true })))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/event-types/{id}/seats",
    params(("id" = i64, Path, description = "Event type id")),
    responses(
        (status = 200, description = "State of the offer seats toggle", body = ApiResponse<SeatsToggleState>),
        (status = 404, description = "Unknown event type")
    ),
    tag = "Event Types"
))]
pub async fn get_seats_handler(
    State(state): State<Arc<EventTypesState>>,
    Path(id): Path<i64>,
) -> HandlerResult<SeatsToggleState> {
    Ok(Json(ApiResponse::success(state.service.seats_state(id).await?)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/event-types/{id}/seats",
    params(("id" = i64, Path, description = "Event type id")),
    request_body = UpdateSeatsRequest,
    responses(
        (status = 200, description = "Updated seats state", body = ApiResponse<SeatsToggleState>),
        (status = 400, description = "Seat count below 1"),
        (status = 403, description = "Seats are locked by the managed parent"),
        (status = 404, description = "Unknown event type"),
        (status = 409, description = "Seats are not supported with the current settings")
    ),
    tag = "Event Types"
))]
pub async fn update_seats_handler(
    State(state): State<Arc<EventTypesState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSeatsRequest>,
) -> HandlerResult<SeatsToggleState> {
    Ok(Json(ApiResponse::success(
        state.service.update_seats(id, payload).await?,
    )))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/event-types/{id}/tabs",
    params(("id" = i64, Path, description = "Event type id")),
    responses(
        (status = 200, description = "Editor tabs", body = ApiResponse<TabsNavigation>),
        (status = 404, description = "Unknown event type")
    ),
    tag = "Event Types"
))]
pub async fn get_tabs_handler(
    State(state): State<Arc<EventTypesState>>,
    Path(id): Path<i64>,
) -> HandlerResult<TabsNavigation> {
    Ok(Json(ApiResponse::success(state.service.tabs(id).await?)))
}
