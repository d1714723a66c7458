use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{Event, EventFilter};
use crate::utils::error::AppError;

pub const EMPTY_PERIOD: &str = "No events scheduled for this period.";

/// Resolved bounds of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DigestWindow {
    pub const DEFAULT_DAYS: i64 = 7;

    /// Fills in missing bounds: `start` defaults to midnight of `today` and
    /// `end` to `start` plus seven days.
    pub fn resolve(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        today: NaiveDate,
    ) -> Result<Self, AppError> {
        let start = start.unwrap_or_else(|| today.and_time(NaiveTime::MIN));
        let end = match end {
            Some(end) => end,
            None => start
                .checked_add_signed(Duration::days(Self::DEFAULT_DAYS))
                .ok_or_else(|| AppError::ValidationError("start_date out of range".to_string()))?,
        };
        Ok(Self { start, end })
    }

    /// Events that begin inside the window.
    pub fn filter(&self) -> EventFilter {
        EventFilter::starting_within(self.start, self.end)
    }
}

/// Renders `events` (ascending by start time) as a day-grouped digest.
pub fn render_digest(window: &DigestWindow, events: &[Event]) -> String {
    let mut out = format!(
        "Calendar from {} to {}:\n\n",
        window.start.format("%Y-%m-%d"),
        window.end.format("%Y-%m-%d")
    );

    if events.is_empty() {
        out.push_str(EMPTY_PERIOD);
        out.push('\n');
        return out;
    }

    let mut current_day = None;
    for event in events {
        let day = event.start_time.date();
        if current_day != Some(day) {
            current_day = Some(day);
            out.push_str(&format!("== {} ==\n", day.format("%A, %B %d, %Y")));
        }

        out.push_str(&format!(
            "- {} - {}: {} ({})",
            event.start_time.format("%I:%M %p"),
            event.end_time.format("%I:%M %p"),
            event.title,
            event.event_type
        ));
        if let Some(location) = &event.location {
            out.push_str(" at ");
            out.push_str(location);
        }
        out.push('\n');
    }

    out
}
