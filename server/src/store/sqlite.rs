use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use super::{EventStore, StoreError};
use crate::models::{Event, EventFilter, NewEvent};

const EVENT_COLUMNS: &str = "id, title, start_time, end_time, event_type, location, created_at";

#[derive(Clone)]
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    /// Opens (creating if needed) the database at `database_url` and applies migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        tracing::info!("Successfully connected to database");
        Self::from_pool(pool).await
    }

    /// A private in-memory database. The single connection is never recycled,
    /// since dropping it would drop the data.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Migrations run successfully");
        Ok(Self { pool })
    }
}

#[async_trait]
impl EventStore for SqliteEventStore {
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError> {
        let sql = format!(
            "INSERT INTO events (title, start_time, end_time, event_type, location, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {}",
            EVENT_COLUMNS
        );

        let created = sqlx::query_as::<_, Event>(&sql)
            .bind(event.title)
            .bind(event.start_time)
            .bind(event.end_time)
            .bind(event.event_type)
            .bind(event.location)
            .bind(Utc::now().naive_utc())
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear_all(&self) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM events").execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(existing as u64)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn query(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM events WHERE 1 = 1", EVENT_COLUMNS));

        if let Some(from) = filter.start_from {
            builder.push(" AND start_time >= ").push_bind(from);
        }
        if let Some(until) = filter.start_until {
            builder.push(" AND start_time <= ").push_bind(until);
        }
        if let Some(until) = filter.end_until {
            builder.push(" AND end_time <= ").push_bind(until);
        }
        builder.push(" ORDER BY start_time, id");

        let events = builder
            .build_query_as::<Event>()
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }
}
