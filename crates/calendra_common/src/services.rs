// --- File: crates/calendra_common/src/services.rs ---
//! Repository abstractions.
//!
//! Handlers and services only see these traits; the backend decides at
//! startup whether the SQL or the in-memory implementations back them.

use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::CalendraError;
use crate::models::{Booking, EventType};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for boxed errors
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl BoxedError {
    /// The conflicting slug when this wraps a [`DuplicateSlug`].
    pub fn duplicate_slug(&self) -> Option<&str> {
        self.0.downcast_ref::<DuplicateSlug>().map(|dup| dup.0.as_str())
    }
}

/// Returned by [`EventTypeRepository::create`] when another event type owns the slug.
#[derive(Debug, thiserror::Error)]
#[error("slug '{0}' is already taken")]
pub struct DuplicateSlug(pub String);

impl From<DuplicateSlug> for BoxedError {
    fn from(err: DuplicateSlug) -> Self {
        BoxedError(Box::new(err))
    }
}

impl From<BoxedError> for CalendraError {
    fn from(err: BoxedError) -> Self {
        CalendraError::DatabaseError(err.to_string())
    }
}

/// Storage for event types.
pub trait EventTypeRepository: Send + Sync {
    /// Every event type, ordered by id.
    fn list(&self) -> BoxFuture<'_, Vec<EventType>, BoxedError>;

    fn find_by_id(&self, id: i64) -> BoxFuture<'_, Option<EventType>, BoxedError>;

    fn find_by_slug(&self, slug: &str) -> BoxFuture<'_, Option<EventType>, BoxedError>;

    /// Stores a new event type. An `id` of 0 asks the repository to assign one.
    /// Fails with [`DuplicateSlug`] when the slug is already in use.
    fn create(&self, event_type: EventType) -> BoxFuture<'_, EventType, BoxedError>;

    /// Replaces an existing event type; returns `None` when the id is unknown.
    fn update(&self, event_type: EventType) -> BoxFuture<'_, Option<EventType>, BoxedError>;

    /// Returns `true` if something was deleted.
    fn delete(&self, id: i64) -> BoxFuture<'_, bool, BoxedError>;
}

/// Storage for bookings.
pub trait BookingRepository: Send + Sync {
    /// Bookings overlapping `[start, end)`, cancelled ones included, ordered by start.
    fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<Booking>, BoxedError>;

    fn find_by_uid(&self, uid: &str) -> BoxFuture<'_, Option<Booking>, BoxedError>;

    fn create(&self, booking: Booking) -> BoxFuture<'_, Booking, BoxedError>;

    /// Replaces an existing booking, e.g. after a seat was taken; `None` when unknown.
    fn update(&self, booking: Booking) -> BoxFuture<'_, Option<Booking>, BoxedError>;
}

/// Repository handles shared by the HTTP modules.
pub trait RepositoryFactory: Send + Sync {
    fn event_types(&self) -> Arc<dyn EventTypeRepository>;

    fn bookings(&self) -> Arc<dyn BookingRepository>;
}
