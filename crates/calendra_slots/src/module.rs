//! Wiring of the slots module.
//!
//! Builds the repository, the slots service and the output service from
//! the shared event type and booking repositories, mounts the public and
//! the authenticated slots controllers plus the booking routes, and hands
//! the slots service out to other modules.

use axum::{routing::get, Router};
use calendra_common::services::{BookingRepository, EventTypeRepository};
use calendra_config::AppConfig;
use std::sync::Arc;

use crate::error::SlotsError;
use crate::handlers::{
    book_slot_handler, get_available_slots_handler, get_custom_available_slots_handler,
    list_bookings_handler, SlotsState,
};
use crate::output::SlotsOutputService;
use crate::repository::SlotsRepository;
use crate::service::SlotsService;

pub struct SlotsModule {
    slots_service: Arc<SlotsService>,
    slots_output_service: Arc<SlotsOutputService>,
}

impl SlotsModule {
    pub fn new(
        event_types: Arc<dyn EventTypeRepository>,
        bookings: Arc<dyn BookingRepository>,
        config: &AppConfig,
    ) -> Result<Self, SlotsError> {
        let repository = Arc::new(SlotsRepository::new(event_types, bookings));
        Ok(Self {
            slots_service: Arc::new(SlotsService::new(repository.clone(), config)?),
            slots_output_service: Arc::new(SlotsOutputService::new(repository)),
        })
    }

    pub fn slots_service(&self) -> Arc<SlotsService> {
        self.slots_service.clone()
    }

    pub fn routes(&self) -> Router {
        let state = Arc::new(SlotsState {
            slots_service: self.slots_service.clone(),
            slots_output_service: self.slots_output_service.clone(),
        });

        Router::new()
            .route(
                "/custom/slots/available",
                get(get_custom_available_slots_handler),
            )
            .route("/slots/available", get(get_available_slots_handler))
            .route(
                "/bookings",
                get(list_bookings_handler).post(book_slot_handler),
            )
            .with_state(state)
    }
}
