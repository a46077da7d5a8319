// File: crates/calendra_event_types/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::DeletedResponse;
use crate::locked_fields::LockDisableProps;
use crate::seats::{SeatsToggleState, UpdateSeatsRequest};
use crate::service::CreateEventTypeRequest;
use crate::tabs::{TabItem, TabsMetadata, TabsNavigation};
use calendra_common::models::EventType;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_event_types_handler,
        crate::handlers::get_event_type_handler,
        crate::handlers::create_event_type_handler,
        crate::handlers::delete_event_type_handler,
        crate::handlers::get_seats_handler,
        crate::handlers::update_seats_handler,
        crate::handlers::get_tabs_handler
    ),
    components(
        schemas(
            EventType,
            CreateEventTypeRequest,
            DeletedResponse,
            SeatsToggleState,
            UpdateSeatsRequest,
            LockDisableProps,
            TabItem,
            TabsMetadata,
            TabsNavigation
        )
    ),
    tags(
        (name = "Event Types", description = "Event type management, seats and editor tabs")
    )
)]
pub struct EventTypesApiDoc;
