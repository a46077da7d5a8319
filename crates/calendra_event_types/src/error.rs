use calendra_common::services::BoxedError;
use calendra_common::{conflict, forbidden, not_found, validation_error, CalendraError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventTypeError {
    #[error("Event type {0} not found")]
    NotFound(i64),
    #[error("Slug '{0}' is already in use")]
    SlugTaken(String),
    #[error("Invalid event type: {0}")]
    Invalid(String),
    #[error("Field '{0}' is locked by the team admin")]
    Locked(String),
    #[error("{0}")]
    SeatsUnavailable(String),
    #[error("Seats per time slot must be at least 1, got {0}")]
    InvalidSeats(i64),
    #[error("Repository error: {0}")]
    Repository(#[from] BoxedError),
}

impl From<EventTypeError> for CalendraError {
    fn from(err: EventTypeError) -> Self {
        match err {
            EventTypeError::NotFound(_) => not_found(err),
            EventTypeError::SlugTaken(_) | EventTypeError::SeatsUnavailable(_) => conflict(err),
            EventTypeError::Invalid(_) | EventTypeError::InvalidSeats(_) => validation_error(err),
            EventTypeError::Locked(_) => forbidden(err),
            EventTypeError::Repository(e) => CalendraError::DatabaseError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendra_common::HttpStatusCode;

    #[test]
    fn test_status_codes() {
        let status = |err: EventTypeError| CalendraError::from(err).status_code();
        assert_eq!(status(EventTypeError::NotFound(7)), 404);
        assert_eq!(status(EventTypeError::SlugTaken("intro".into())), 409);
        assert_eq!(status(EventTypeError::InvalidSeats(0)), 400);
        assert_eq!(status(EventTypeError::Locked("length".into())), 403);
    }
}
