// File: crates/calendra_slots/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{
    BookSlotRequest, BookingsQuery, GetAvailableSlotsInput, OutputSlot, SlotFormat, SlotsResponse,
};
use calendra_common::models::{Attendee, Booking, BookingStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_custom_available_slots_handler,
        crate::handlers::get_available_slots_handler,
        crate::handlers::book_slot_handler,
        crate::handlers::list_bookings_handler
    ),
    components(
        schemas(
            GetAvailableSlotsInput,
            SlotFormat,
            OutputSlot,
            SlotsResponse,
            BookSlotRequest,
            BookingsQuery,
            Booking,
            BookingStatus,
            Attendee
        )
    ),
    tags(
        (name = "Slots", description = "Available time slots"),
        (name = "Bookings", description = "Booking slots and seats")
    )
)]
pub struct SlotsApiDoc;
