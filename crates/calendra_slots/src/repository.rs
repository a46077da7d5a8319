//! Data access for the slots module.

use calendra_common::models::{Booking, EventType};
use calendra_common::services::{BookingRepository, EventTypeRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::error::SlotsError;

/// How a caller names the event type it wants slots for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTypeKey {
    Id(i64),
    Slug(String),
}

impl EventTypeKey {
    /// Prefers the id when both are given.
    pub fn from_parts(id: Option<i64>, slug: Option<&str>) -> Result<Self, SlotsError> {
        match (id, slug) {
            (Some(id), _) => Ok(EventTypeKey::Id(id)),
            (None, Some(slug)) if !slug.is_empty() => Ok(EventTypeKey::Slug(slug.to_string())),
            _ => Err(SlotsError::MissingEventType),
        }
    }
}

impl std::fmt::Display for EventTypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventTypeKey::Id(id) => write!(f, "id {}", id),
            EventTypeKey::Slug(slug) => write!(f, "slug '{}'", slug),
        }
    }
}

pub struct SlotsRepository {
    event_types: Arc<dyn EventTypeRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl SlotsRepository {
    pub fn new(
        event_types: Arc<dyn EventTypeRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            event_types,
            bookings,
        }
    }

    pub async fn get_event_type(
        &self,
        key: &EventTypeKey,
    ) -> Result<Option<EventType>, SlotsError> {
        let found = match key {
            EventTypeKey::Id(id) => self.event_types.find_by_id(*id).await?,
            EventTypeKey::Slug(slug) => self.event_types.find_by_slug(slug).await?,
        };
        Ok(found)
    }

    /// Bookings overlapping the window, cancelled ones included.
    pub async fn get_bookings(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, SlotsError> {
        Ok(self.bookings.find_in_range(start, end).await?)
    }

    pub async fn get_booking(&self, uid: &str) -> Result<Option<Booking>, SlotsError> {
        Ok(self.bookings.find_by_uid(uid).await?)
    }

    pub async fn create_booking(&self, booking: Booking) -> Result<Booking, SlotsError> {
        Ok(self.bookings.create(booking).await?)
    }

    pub async fn update_booking(&self, booking: Booking) -> Result<Option<Booking>, SlotsError> {
        Ok(self.bookings.update(booking).await?)
    }
}
