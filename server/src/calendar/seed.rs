//! Mock data: a fixed one-week schedule with randomly chosen client names.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use crate::models::NewEvent;
use crate::store::{EventStore, StoreError};

pub const COMPANIES: [&str; 8] = [
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella Corp",
    "Stark Industries",
    "Wayne Enterprises",
    "Hooli",
    "Wonka Industries",
];

pub const STANDUP_TITLE: &str = "Team Standup";

/// The Saturday the mock week hangs off; the seeded work week follows it.
pub fn reference_saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 8).expect("reference date is a valid calendar date")
}

#[derive(Debug, Clone, Copy)]
enum Title {
    Fixed(&'static str),
    ClientMeeting,
    ClientDinner,
}

struct Slot {
    /// Days after the reference Saturday.
    day_offset: i64,
    start: (i64, i64),
    minutes: i64,
    title: Title,
    event_type: &'static str,
    location: &'static str,
}

const SCHEDULE: [Slot; 6] = [
    Slot {
        day_offset: 2,
        start: (11, 0),
        minutes: 60,
        title: Title::ClientMeeting,
        event_type: "work",
        location: "Client HQ",
    },
    Slot {
        day_offset: 3,
        start: (9, 0),
        minutes: 30,
        title: Title::Fixed(STANDUP_TITLE),
        event_type: "work",
        location: "Office - Room 301",
    },
    Slot {
        day_offset: 4,
        start: (14, 0),
        minutes: 90,
        title: Title::ClientMeeting,
        event_type: "work",
        location: "Video Call",
    },
    Slot {
        day_offset: 5,
        start: (9, 0),
        minutes: 30,
        title: Title::Fixed(STANDUP_TITLE),
        event_type: "work",
        location: "Office - Room 301",
    },
    Slot {
        day_offset: 5,
        start: (19, 0),
        minutes: 120,
        title: Title::ClientDinner,
        event_type: "social",
        location: "The Capital Grille",
    },
    Slot {
        day_offset: 6,
        start: (10, 0),
        minutes: 60,
        title: Title::ClientMeeting,
        event_type: "work",
        location: "Downtown Office",
    },
];

fn pick_company<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COMPANIES[rng.gen_range(0..COMPANIES.len())]
}

fn slot_start(anchor: NaiveDate, slot: &Slot) -> NaiveDateTime {
    let (hour, minute) = slot.start;
    anchor.and_time(NaiveTime::MIN)
        + Duration::days(slot.day_offset)
        + Duration::hours(hour)
        + Duration::minutes(minute)
}

/// Builds the mock week following `anchor`. Only the client names depend on `rng`.
pub fn mock_week<R: Rng + ?Sized>(anchor: NaiveDate, rng: &mut R) -> Vec<NewEvent> {
    SCHEDULE
        .iter()
        .map(|slot| {
            let title = match slot.title {
                Title::Fixed(title) => title.to_string(),
                Title::ClientMeeting => format!("Client Meeting with {}", pick_company(rng)),
                Title::ClientDinner => format!("Client Dinner with {}", pick_company(rng)),
            };
            let start_time = slot_start(anchor, slot);

            NewEvent {
                title,
                start_time,
                end_time: start_time + Duration::minutes(slot.minutes),
                event_type: slot.event_type.to_string(),
                location: Some(slot.location.to_string()),
            }
        })
        .collect()
}

/// Replaces the store contents with `events`, returning how many were inserted.
///
/// Not atomic: a concurrent reader may observe a partially seeded calendar.
pub async fn populate<S>(store: &S, events: Vec<NewEvent>) -> Result<usize, StoreError>
where
    S: EventStore + ?Sized,
{
    let cleared = store.clear_all().await?;
    tracing::debug!(cleared, "Cleared calendar before seeding");

    let mut inserted = 0;
    for event in events {
        store.insert(event).await?;
        inserted += 1;
    }

    tracing::info!(inserted, "Mock calendar populated");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventFilter;
    use crate::store::MemoryEventStore;
    use chrono::{Datelike, Weekday};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_reference_date_is_saturday() {
        assert_eq!(reference_saturday().weekday(), Weekday::Sat);
    }

    #[test]
    fn test_mock_week_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let events = mock_week(reference_saturday(), &mut rng);

        assert_eq!(events.len(), 6);
        assert!(events.iter().all(|e| e.end_time > e.start_time));

        let standups: Vec<_> = events.iter().filter(|e| e.title == STANDUP_TITLE).collect();
        assert_eq!(standups.len(), 2);
        assert_eq!(standups[0].start_time, at(11, 9, 0));
        assert_eq!(standups[0].end_time, at(11, 9, 30));
        assert_eq!(standups[0].start_time.weekday(), Weekday::Tue);
        assert_eq!(standups[1].start_time, at(13, 9, 0));
        assert_eq!(standups[1].end_time, at(13, 9, 30));
        assert_eq!(standups[1].start_time.weekday(), Weekday::Thu);

        let meetings: Vec<_> = events
            .iter()
            .filter(|e| e.title.starts_with("Client Meeting with "))
            .collect();
        assert_eq!(meetings.len(), 3);
        let days: Vec<Weekday> = meetings.iter().map(|e| e.start_time.weekday()).collect();
        assert_eq!(days, [Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert!(meetings.iter().all(|e| e.event_type == "work"));

        let dinner = events
            .iter()
            .find(|e| e.title.starts_with("Client Dinner with "))
            .unwrap();
        assert_eq!(dinner.start_time, at(13, 19, 0));
        assert_eq!(dinner.end_time, at(13, 21, 0));
    }

    #[test]
    fn test_titles_use_known_companies() {
        let mut rng = StdRng::seed_from_u64(42);
        for event in mock_week(reference_saturday(), &mut rng) {
            if let Some(company) = event
                .title
                .strip_prefix("Client Meeting with ")
                .or_else(|| event.title.strip_prefix("Client Dinner with "))
            {
                assert!(COMPANIES.contains(&company), "unknown company {}", company);
            }
        }
    }

    #[test]
    fn test_same_seed_same_titles() {
        let first = mock_week(reference_saturday(), &mut StdRng::seed_from_u64(3));
        let second = mock_week(reference_saturday(), &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_populate_replaces_existing_events() {
        let store = MemoryEventStore::new();
        store
            .insert(NewEvent {
                title: "Old".to_string(),
                start_time: at(1, 9, 0),
                end_time: at(1, 10, 0),
                event_type: "personal".to_string(),
                location: None,
            })
            .await
            .unwrap();

        let events = mock_week(reference_saturday(), &mut StdRng::seed_from_u64(1));
        assert_eq!(populate(&store, events).await.unwrap(), 6);

        let stored = store.query(&EventFilter::default()).await.unwrap();
        assert_eq!(stored.len(), 6);
        assert!(stored.iter().all(|e| e.title != "Old"));
        assert_eq!(
            stored.iter().filter(|e| e.title == STANDUP_TITLE).count(),
            2
        );
    }
}
