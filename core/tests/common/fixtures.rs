// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use monthcal_core::{CalendarView, Config, DisplayMonth, EventDraft, EventStore};

/// Week start used by the tests exercising a non-default configuration.
#[allow(dead_code)]
pub const SUNDAY_FIRST: Weekday = Weekday::Sun;

/// Builds a date, panicking on invalid input.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Builds a date-time on the given day.
#[must_use]
pub fn at(day: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    day.and_time(NaiveTime::from_hms_opt(h, min, 0).expect("valid test time"))
}

#[must_use]
pub fn month(y: i32, m: u32) -> DisplayMonth {
    DisplayMonth::new(y, m).expect("valid test month")
}

/// Creates an event draft spanning the given range.
#[must_use]
pub fn test_event_draft(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        start,
        end,
        color: None,
        description: None,
    }
}

#[must_use]
pub fn shared_store() -> Rc<RefCell<EventStore>> {
    Rc::new(RefCell::new(EventStore::new()))
}

/// Creates a view on a fresh store with the given week start, at `now`.
#[must_use]
pub fn test_view(
    week_start: Weekday,
    now: NaiveDateTime,
) -> (Rc<RefCell<EventStore>>, CalendarView) {
    let store = shared_store();
    let config = Config {
        week_start,
        ..Config::default()
    };
    let view = CalendarView::new(store.clone(), config, now);
    (store, view)
}
