//! Event persistence.
//!
//! Handlers only see the [`EventStore`] trait; `main` wires in the SQLite
//! implementation and tests swap in [`MemoryEventStore`].

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Event, EventFilter, NewEvent};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryEventStore;
pub use sqlite::SqliteEventStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persists a new event, assigning its id and creation timestamp.
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError>;

    /// Returns `false` when no event had this id.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Removes every event and reports how many were removed.
    async fn clear_all(&self) -> Result<u64, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Events matching `filter`, ascending by start time.
    async fn query(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError>;
}
