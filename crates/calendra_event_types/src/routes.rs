use axum::{routing::get, Router};
use calendra_common::services::EventTypeRepository;
use calendra_config::AppConfig;
use std::sync::Arc;

use crate::handlers::{
    create_event_type_handler, delete_event_type_handler, get_event_type_handler,
    get_seats_handler, get_tabs_handler, list_event_types_handler, update_seats_handler,
    EventTypesState,
};
use crate::locale::EnglishTranslator;
use crate::seats::SeatsLimits;
use crate::service::EventTypeService;

/// Builds the service the event type routes run on.
pub fn event_type_service(
    repository: Arc<dyn EventTypeRepository>,
    config: &AppConfig,
) -> EventTypeService {
    EventTypeService::new(
        repository,
        SeatsLimits::from(&config.event_types),
        Arc::new(EnglishTranslator),
    )
}

/// Event type CRUD plus the seats and tabs view models.
pub fn routes(repository: Arc<dyn EventTypeRepository>, config: Arc<AppConfig>) -> Router {
    let state = Arc::new(EventTypesState {
        service: Arc::new(event_type_service(repository, &config)),
    });

    Router::new()
        .route(
            "/event-types",
            get(list_event_types_handler).post(create_event_type_handler),
        )
        .route(
            "/event-types/{id}",
            get(get_event_type_handler).delete(delete_event_type_handler),
        )
        .route(
            "/event-types/{id}/seats",
            get(get_seats_handler).patch(update_seats_handler),
        )
        .route("/event-types/{id}/tabs", get(get_tabs_handler))
        .with_state(state)
}
