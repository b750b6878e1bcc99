// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// The color given to new events unless configured otherwise.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Opaque unique identifier of an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar entry owned by the [`EventStore`](crate::EventStore).
///
/// `start <= end` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The unique identifier of the event.
    pub id: EventId,

    /// The title of the event.
    pub title: String,

    /// The start date and time of the event.
    pub start: NaiveDateTime,

    /// The end date and time of the event.
    pub end: NaiveDateTime,

    /// Display color as `#rrggbb`, if any.
    pub color: Option<String>,

    /// The description of the event, if available.
    pub description: Option<String>,
}

impl Event {
    /// Builds an event from a draft under the given id.
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            start: draft.start,
            end: draft.end,
            color: draft.color,
            description: draft.description,
        }
    }

    /// The calendar day the event starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// The calendar day the event ends on.
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Whether the event spans more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        self.start_date() < self.end_date()
    }
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The title of the event.
    pub title: String,

    /// The start date and time of the event.
    pub start: NaiveDateTime,

    /// The end date and time of the event.
    pub end: NaiveDateTime,

    /// Display color as `#rrggbb`, if any.
    pub color: Option<String>,

    /// The description of the event, if available.
    pub description: Option<String>,
}

impl EventDraft {
    /// Merges the draft onto an existing event, keeping the event's id.
    pub fn apply_to(self, event: &Event) -> Event {
        Event::from_draft(event.id.clone(), self)
    }
}

impl From<Event> for EventDraft {
    fn from(event: Event) -> Self {
        Self {
            title: event.title,
            start: event.start,
            end: event.end,
            color: event.color,
            description: event.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn draft() -> EventDraft {
        EventDraft {
            title: "Review".to_string(),
            start: at(5, 10, 0),
            end: at(7, 11, 0),
            color: Some(DEFAULT_COLOR.to_string()),
            description: None,
        }
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = EventId::generate();
        let b = EventId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn apply_to_keeps_the_original_id() {
        let original = Event::from_draft(EventId::from("evt-1"), draft());
        let mut edited = draft();
        edited.title = "Retro".to_string();

        let merged = edited.apply_to(&original);
        assert_eq!(merged.id, EventId::from("evt-1"));
        assert_eq!(merged.title, "Retro");
        assert_eq!(merged.start, original.start);
    }

    #[test]
    fn multi_day_is_decided_by_calendar_day() {
        let event = Event::from_draft(EventId::from("evt-1"), draft());
        assert!(event.is_multi_day());

        let mut same_day = draft();
        same_day.end = at(5, 23, 59);
        let event = Event::from_draft(EventId::from("evt-2"), same_day);
        assert!(!event.is_multi_day());
    }
}
