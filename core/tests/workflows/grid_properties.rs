// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Structural properties of the month grid over a wide range of months.

use chrono::Weekday;
use monthcal_core::CalendarGrid;
use monthcal_core::placement::{events_on, segment_role};

use crate::common::{assert_grid_shape, at, date, month};

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[test]
fn grid_shape_holds_for_every_month_and_week_start() {
    let today = date(2024, 3, 4);
    for year in 1900..=2100 {
        for m in 1..=12 {
            for week_start in ALL_WEEKDAYS {
                let grid = CalendarGrid::build(month(year, m), week_start, today);
                assert_grid_shape(&grid, week_start);
                assert!((4..=6).contains(&grid.week_count()));
            }
        }
    }
}

#[test]
fn grid_february_leap_and_common_years() {
    let leap = CalendarGrid::build(month(2024, 2), Weekday::Mon, date(2024, 1, 1));
    assert_eq!(leap.cells.iter().filter(|c| c.in_month).count(), 29);

    let common = CalendarGrid::build(month(2023, 2), Weekday::Mon, date(2024, 1, 1));
    assert_eq!(common.cells.iter().filter(|c| c.in_month).count(), 28);

    // February 2021 starts on a Monday and fits exactly four weeks.
    let tight = CalendarGrid::build(month(2021, 2), Weekday::Mon, date(2024, 1, 1));
    assert_eq!(tight.week_count(), 4);
    assert!(tight.cells.iter().all(|c| c.in_month));
}

#[test]
fn placement_three_day_event() {
    let event = monthcal_core::Event {
        id: "trip".into(),
        title: "Trip".to_string(),
        start: at(date(2024, 3, 5), 0, 0),
        end: at(date(2024, 3, 7), 0, 0),
        color: None,
        description: None,
    };
    let events = [event];

    let grid = CalendarGrid::build(month(2024, 3), Weekday::Mon, date(2024, 3, 1));
    let shown: Vec<_> = grid
        .cells
        .iter()
        .filter(|c| !events_on(&events, c.date).is_empty())
        .map(|c| c.date)
        .collect();
    assert_eq!(
        shown,
        vec![date(2024, 3, 5), date(2024, 3, 6), date(2024, 3, 7)]
    );

    assert!(segment_role(&events[0], date(2024, 3, 5)).is_some_and(|r| r.is_start()));
    assert!(segment_role(&events[0], date(2024, 3, 7)).is_some_and(|r| r.is_end()));
}
