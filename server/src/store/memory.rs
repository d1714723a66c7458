use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{EventStore, StoreError};
use crate::models::{Event, EventFilter, NewEvent};

#[derive(Default)]
struct Inner {
    next_id: i64,
    events: BTreeMap<i64, Event>,
}

/// Process-local store. Ids keep increasing across `clear_all`, like an
/// autoincrement column.
#[derive(Default)]
pub struct MemoryEventStore {
    inner: RwLock<Inner>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        let event = event.into_event(id, Utc::now().naive_utc());
        inner.events.insert(id, event.clone());
        Ok(event)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.events.remove(&id).is_some())
    }

    async fn clear_all(&self) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let removed = inner.events.len() as u64;
        inner.events.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().await.events.len() as u64)
    }

    async fn query(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError> {
        let inner = self.inner.read().await;
        // BTreeMap yields ids ascending, so the stable sort breaks ties by id.
        let mut events: Vec<Event> = inner
            .events
            .values()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect();
        events.sort_by_key(|event| event.start_time);
        Ok(events)
    }
}
