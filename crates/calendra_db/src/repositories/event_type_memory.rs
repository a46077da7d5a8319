//! In-memory event type repository.

use calendra_common::models::EventType;
use calendra_common::services::{BoxFuture, BoxedError, DuplicateSlug, EventTypeRepository};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryEventTypeRepository {
    items: RwLock<BTreeMap<i64, EventType>>,
}

impl MemoryEventTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-filled with `event_types`, keyed by their ids.
    pub fn with_event_types(event_types: impl IntoIterator<Item = EventType>) -> Self {
        let items = event_types.into_iter().map(|e| (e.id, e)).collect();
        Self {
            items: RwLock::new(items),
        }
    }
}

impl EventTypeRepository for MemoryEventTypeRepository {
    fn list(&self) -> BoxFuture<'_, Vec<EventType>, BoxedError> {
        Box::pin(async move { Ok(self.items.read().await.values().cloned().collect()) })
    }

    fn find_by_id(&self, id: i64) -> BoxFuture<'_, Option<EventType>, BoxedError> {
        Box::pin(async move { Ok(self.items.read().await.get(&id).cloned()) })
    }

    fn find_by_slug(&self, slug: &str) -> BoxFuture<'_, Option<EventType>, BoxedError> {
        let slug = slug.to_string();
        Box::pin(async move {
            Ok(self
                .items
                .read()
                .await
                .values()
                .find(|e| e.slug == slug)
                .cloned())
        })
    }

    fn create(&self, mut event_type: EventType) -> BoxFuture<'_, EventType, BoxedError> {
        Box::pin(async move {
            let mut items = self.items.write().await;
            if items.values().any(|e| e.slug == event_type.slug) {
                return Err(DuplicateSlug(event_type.slug).into());
            }
            if event_type.id <= 0 {
                event_type.id = items.keys().next_back().copied().unwrap_or(0) + 1;
            }
            items.insert(event_type.id, event_type.clone());
            Ok(event_type)
        })
    }

    fn update(&self, event_type: EventType) -> BoxFuture<'_, Option<EventType>, BoxedError> {
        Box::pin(async move {
            let mut items = self.items.write().await;
            match items.get_mut(&event_type.id) {
                Some(existing) => {
                    *existing = event_type.clone();
                    Ok(Some(event_type))
                }
                None => Ok(None),
            }
        })
    }

    fn delete(&self, id: i64) -> BoxFuture<'_, bool, BoxedError> {
        Box::pin(async move { Ok(self.items.write().await.remove(&id).is_some()) })
    }
}
