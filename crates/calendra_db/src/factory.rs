//! Repository factories.
//!
//! The backend builds exactly one of these at startup and hands it to the
//! HTTP modules as an `Arc<dyn RepositoryFactory>`.

use crate::error::DbError;
use crate::repositories::{
    MemoryBookingRepository, MemoryEventTypeRepository, SqlBookingRepository,
    SqlEventTypeRepository,
};
use crate::DbClient;
use calendra_common::models::{Booking, EventType};
use calendra_common::services::{BookingRepository, EventTypeRepository, RepositoryFactory};
use std::sync::Arc;
use tracing::info;

/// SQL-backed repositories sharing one connection pool.
pub struct DbRepositoryFactory {
    event_types: Arc<SqlEventTypeRepository>,
    bookings: Arc<SqlBookingRepository>,
}

impl DbRepositoryFactory {
    /// Wraps `db_client` and makes sure both tables exist.
    pub async fn new(db_client: DbClient) -> Result<Self, DbError> {
        let event_types = SqlEventTypeRepository::new(db_client.clone());
        let bookings = SqlBookingRepository::new(db_client);
        event_types.init_schema().await?;
        bookings.init_schema().await?;
        info!("SQL repositories ready");

        Ok(Self {
            event_types: Arc::new(event_types),
            bookings: Arc::new(bookings),
        })
    }
}

impl RepositoryFactory for DbRepositoryFactory {
    fn event_types(&self) -> Arc<dyn EventTypeRepository> {
        self.event_types.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.bookings.clone()
    }
}

#[derive(Default)]
pub struct MemoryRepositoryFactory {
    event_types: Arc<MemoryEventTypeRepository>,
    bookings: Arc<MemoryBookingRepository>,
}

impl MemoryRepositoryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(
        event_types: impl IntoIterator<Item = EventType>,
        bookings: impl IntoIterator<Item = Booking>,
    ) -> Self {
        Self {
            event_types: Arc::new(MemoryEventTypeRepository::with_event_types(event_types)),
            bookings: Arc::new(MemoryBookingRepository::with_bookings(bookings)),
        }
    }
}

impl RepositoryFactory for MemoryRepositoryFactory {
    fn event_types(&self) -> Arc<dyn EventTypeRepository> {
        self.event_types.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.bookings.clone()
    }
}
