// --- File: crates/calendra_slots/src/handlers.rs ---
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use calendra_common::models::Booking;
use calendra_common::{ApiResponse, CalendraError};
use std::sync::Arc;
use tracing::info;

use crate::models::{BookSlotRequest, BookingsQuery, GetAvailableSlotsInput, SlotsResponse};
use crate::output::SlotsOutputService;
use crate::service::SlotsService;

#[derive(Clone)]
pub struct SlotsState {
    pub slots_service: Arc<SlotsService>,
    pub slots_output_service: Arc<SlotsOutputService>,
}

async fn available_slots(
    state: &SlotsState,
    input: GetAvailableSlotsInput,
    is_team_event: bool,
) -> Result<Json<ApiResponse<SlotsResponse>>, CalendraError> {
    let available = state
        .slots_service
        .get_available_slots(&input, is_team_event)
        .await?;
    let output = state
        .slots_output_service
        .get_output_slots(
            &available.slots,
            input.duration,
            available.event_type_id,
            input.slot_format.as_deref(),
            input.time_zone.as_deref(),
        )
        .await?;
    Ok(Json(ApiResponse::success(output)))
}

/// Public slots lookup; never treats the event type as a team event.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/custom/slots/available",
    params(GetAvailableSlotsInput),
    responses(
        (status = 200, description = "Free slots keyed by date", body = ApiResponse<SlotsResponse>),
        (status = 400, description = "Bad request (missing event type, invalid window, time zone or format)"),
        (status = 404, description = "Event type not found")
    ),
    tag = "Slots"
))]
pub async fn get_custom_available_slots_handler(
    State(state): State<Arc<SlotsState>>,
    Query(input): Query<GetAvailableSlotsInput>,
) -> Result<Json<ApiResponse<SlotsResponse>>, CalendraError> {
    available_slots(&state, input, false).await
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/slots/available",
    params(GetAvailableSlotsInput),
    responses(
        (status = 200, description = "Free slots keyed by date", body = ApiResponse<SlotsResponse>),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Event type not found")
    ),
    tag = "Slots"
))]
pub async fn get_available_slots_handler(
    State(state): State<Arc<SlotsState>>,
    Query(input): Query<GetAvailableSlotsInput>,
) -> Result<Json<ApiResponse<SlotsResponse>>, CalendraError> {
    let is_team_event = input.is_team_event.unwrap_or(false);
    available_slots(&state, input, is_team_event).await
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings",
    request_body = BookSlotRequest,
    responses(
        (status = 201, description = "Slot booked or seat taken", body = ApiResponse<Booking>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Event type not found"),
        (status = 409, description = "Slot no longer available")
    ),
    tag = "Bookings"
))]
pub async fn book_slot_handler(
    State(state): State<Arc<SlotsState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), CalendraError> {
    info!(
        "Booking request for event type {} at {}",
        payload.event_type_id, payload.start
    );
    let booking = state.slots_service.book_slot(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(booking))))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings",
    params(BookingsQuery),
    responses(
        (status = 200, description = "Bookings overlapping the window", body = ApiResponse<Vec<Booking>>),
        (status = 400, description = "Invalid window")
    ),
    tag = "Bookings"
))]
pub async fn list_bookings_handler(
    State(state): State<Arc<SlotsState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<ApiResponse<Vec<Booking>>>, CalendraError> {
    let bookings = state.slots_service.list_bookings(&query).await?;
    Ok(Json(ApiResponse::success(bookings)))
}
