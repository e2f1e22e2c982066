//! Events, their images and the derived capacity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Bilingual, UserId};

/// Database identity of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Captioned image attached to an event, already in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventImage {
    /// Stored media path, relative to the media root.
    pub path: String,
    /// Caption pair.
    pub caption: Bilingual,
}

/// A scheduled gathering members can register for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Identity.
    pub id: EventId,
    /// Title pair.
    pub title: Bilingual,
    /// Description pair.
    pub description: Bilingual,
    /// When the event starts.
    pub start_datetime: DateTime<Utc>,
    /// Free-form venue.
    pub location: String,
    /// Maximum number of registrations; `None` means unlimited.
    pub capacity: Option<u32>,
    /// Images ordered by `(order, id)`.
    pub images: Vec<EventImage>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// An event paired with its live registration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListing {
    /// The event itself.
    pub event: Event,
    /// Registrations recorded when the listing was read.
    pub registration_count: u64,
}

impl EventListing {
    /// Remaining places, or `None` for unlimited events.
    #[must_use]
    pub fn available_slots(&self) -> Option<u32> {
        available_slots(self.event.capacity, self.registration_count)
    }
}

/// Compute `max(capacity - taken, 0)` for capped events.
///
/// ```
/// use bijou_backend::domain::available_slots;
///
/// assert_eq!(available_slots(Some(10), 7), Some(3));
/// assert_eq!(available_slots(Some(2), 5), Some(0));
/// assert_eq!(available_slots(None, 5), None);
/// ```
#[must_use]
pub fn available_slots(capacity: Option<u32>, taken: u64) -> Option<u32> {
    capacity.map(|cap| {
        let remaining = u64::from(cap).saturating_sub(taken);
        u32::try_from(remaining).unwrap_or(cap)
    })
}

/// Whether an event with `capacity` is full after `taken` registrations.
#[must_use]
pub fn is_full(capacity: Option<u32>, taken: u64) -> bool {
    capacity.is_some_and(|cap| taken >= u64::from(cap))
}

/// Filter applied by event listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter {
    /// Only return events starting at or after this instant.
    pub starts_from: Option<DateTime<Utc>>,
}

impl EventFilter {
    /// Listing every event regardless of date.
    #[must_use]
    pub const fn all() -> Self {
        Self { starts_from: None }
    }

    /// Listing events that have not started before `now`.
    #[must_use]
    pub const fn upcoming(now: DateTime<Utc>) -> Self {
        Self {
            starts_from: Some(now),
        }
    }

    /// Whether `event` passes the filter.
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        self.starts_from
            .is_none_or(|from| event.start_datetime >= from)
    }
}

/// A recorded registration of a member for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Registered member.
    pub user_id: UserId,
    /// Event registered for.
    pub event_id: EventId,
    /// When the registration was recorded.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), 0, false)]
    #[case(Some(1), 1, true)]
    #[case(Some(0), 0, true)]
    #[case(Some(3), 5, true)]
    #[case(None, 1_000, false)]
    fn full_when_count_reaches_capacity(
        #[case] capacity: Option<u32>,
        #[case] taken: u64,
        #[case] expected: bool,
    ) {
        assert_eq!(is_full(capacity, taken), expected);
    }

    #[rstest]
    fn upcoming_filter_includes_events_starting_now() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 9, 0, 0).single().expect("valid date");
        let event = Event {
            id: EventId::new(1),
            title: Bilingual::new("Beach Cleanup", "ビーチの清掃"),
            description: Bilingual::default(),
            start_datetime: now,
            location: "Lake Biwa".to_owned(),
            capacity: None,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        assert!(EventFilter::upcoming(now).matches(&event));
        assert!(!EventFilter::upcoming(now + chrono::TimeDelta::seconds(1)).matches(&event));
        assert!(EventFilter::all().matches(&event));
    }
}
