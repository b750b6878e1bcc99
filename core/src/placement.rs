// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::Event;

/// How a day cell draws its piece of an event bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    /// The event starts and ends on this day.
    Single,

    /// First day of a multi-day event.
    Start,

    /// A day strictly between start and end.
    Middle,

    /// Last day of a multi-day event.
    End,
}

impl SegmentRole {
    pub fn is_start(self) -> bool {
        matches!(self, SegmentRole::Single | SegmentRole::Start)
    }

    pub fn is_end(self) -> bool {
        matches!(self, SegmentRole::Single | SegmentRole::End)
    }
}

/// An event as it appears in one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub event: &'a Event,
    pub role: SegmentRole,
}

/// Whether the event covers `date`, compared at day granularity.
pub fn overlaps(event: &Event, date: NaiveDate) -> bool {
    event.start_date() <= date && date <= event.end_date()
}

/// The events covering `date`, in store order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| overlaps(e, date)).collect()
}

/// The events covering `date` with the bar segment each one draws there.
pub fn place_on(events: &[Event], date: NaiveDate) -> Vec<Placement<'_>> {
    events
        .iter()
        .filter_map(|event| segment_role(event, date).map(|role| Placement { event, role }))
        .collect()
}

/// The segment `event` draws on `date`, or `None` if it does not cover it.
pub fn segment_role(event: &Event, date: NaiveDate) -> Option<SegmentRole> {
    if !overlaps(event, date) {
        return None;
    }

    let role = match (date == event.start_date(), date == event.end_date()) {
        (true, true) => SegmentRole::Single,
        (true, false) => SegmentRole::Start,
        (false, true) => SegmentRole::End,
        (false, false) => SegmentRole::Middle,
    };
    Some(role)
}
