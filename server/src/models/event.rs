use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::error::AppError;
use crate::utils::time;

/// A stored calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub event_type: String,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An event that has not been stored yet; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(deserialize_with = "time::deserialize")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "time::deserialize")]
    pub end_time: NaiveDateTime,
    pub event_type: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title must not be empty".to_string(),
            ));
        }
        if self.end_time <= self.start_time {
            return Err(AppError::ValidationError(
                "End time must be after start time".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_event(self, id: i64, created_at: NaiveDateTime) -> Event {
        Event {
            id,
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
            event_type: self.event_type,
            location: self.location,
            created_at,
        }
    }
}

/// Range bounds for event retrieval. Every bound is inclusive and optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// `start_time >= start_from`
    pub start_from: Option<NaiveDateTime>,
    /// `start_time <= start_until`
    pub start_until: Option<NaiveDateTime>,
    /// `end_time <= end_until`
    pub end_until: Option<NaiveDateTime>,
}

impl EventFilter {
    /// Events that start at or after `start` and finish by `end`.
    pub fn range(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self {
            start_from: start,
            start_until: None,
            end_until: end,
        }
    }

    /// Events whose start time lies inside `[start, end]`.
    pub fn starting_within(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start_from: Some(start),
            start_until: Some(end),
            end_until: None,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.start_from.map_or(true, |from| event.start_time >= from)
            && self.start_until.map_or(true, |until| event.start_time <= until)
            && self.end_until.map_or(true, |until| event.end_time <= until)
    }
}
