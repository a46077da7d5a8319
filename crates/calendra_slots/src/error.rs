use calendra_common::services::BoxedError;
use calendra_common::{conflict, not_found, validation_error, CalendraError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotsError {
    #[error("Either eventTypeId or eventTypeSlug is required")]
    MissingEventType,
    #[error("Event type not found: {0}")]
    EventTypeNotFound(String),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Invalid time range: {0}")]
    InvalidRange(String),
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),
    #[error("Unknown slot format: {0}")]
    InvalidSlotFormat(String),
    #[error("Duration of {0} minutes is not offered by this event type")]
    InvalidDuration(u32),
    #[error("Invalid booking: {0}")]
    InvalidBooking(String),
    #[error("Requested time slot is no longer available")]
    SlotUnavailable,
    #[error("{0} is already booked on this slot")]
    AlreadyBooked(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] BoxedError),
}

impl From<SlotsError> for CalendraError {
    fn from(err: SlotsError) -> Self {
        match err {
            SlotsError::EventTypeNotFound(_) => not_found(err),
            SlotsError::SlotUnavailable | SlotsError::AlreadyBooked(_) => conflict(err),
            SlotsError::TimeParseError(_) => CalendraError::ParseError(err.to_string()),
            SlotsError::ConfigError(_) => CalendraError::ConfigError(err.to_string()),
            SlotsError::Repository(e) => CalendraError::DatabaseError(e.to_string()),
            SlotsError::MissingEventType
            | SlotsError::InvalidRange(_)
            | SlotsError::InvalidTimeZone(_)
            | SlotsError::InvalidSlotFormat(_)
            | SlotsError::InvalidDuration(_)
            | SlotsError::InvalidBooking(_) => validation_error(err),
        }
    }
}
