//! In-memory booking repository.

use calendra_common::models::Booking;
use calendra_common::services::{BookingRepository, BoxFuture, BoxedError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryBookingRepository {
    items: RwLock<HashMap<String, Booking>>,
}

impl MemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let items = bookings.into_iter().map(|b| (b.uid.clone(), b)).collect();
        Self {
            items: RwLock::new(items),
        }
    }
}

impl BookingRepository for MemoryBookingRepository {
    fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<Booking>, BoxedError> {
        Box::pin(async move {
            let mut found: Vec<Booking> = self
                .items
                .read()
                .await
                .values()
                .filter(|b| b.start_time < end && b.end_time > start)
                .cloned()
                .collect();
            found.sort_by_key(|b| b.start_time);
            Ok(found)
        })
    }

    fn find_by_uid(&self, uid: &str) -> BoxFuture<'_, Option<Booking>, BoxedError> {
        let uid = uid.to_string();
        Box::pin(async move { Ok(self.items.read().await.get(&uid).cloned()) })
    }

    fn create(&self, booking: Booking) -> BoxFuture<'_, Booking, BoxedError> {
        Box::pin(async move {
            self.items
                .write()
                .await
                .insert(booking.uid.clone(), booking.clone());
            Ok(booking)
        })
    }

    fn update(&self, booking: Booking) -> BoxFuture<'_, Option<Booking>, BoxedError> {
        Box::pin(async move {
            let mut items = self.items.write().await;
            match items.get_mut(&booking.uid) {
                Some(existing) => {
                    *existing = booking.clone();
                    Ok(Some(booking))
                }
                None => Ok(None),
            }
        })
    }
}
