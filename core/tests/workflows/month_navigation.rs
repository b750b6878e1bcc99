// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month navigation workflows.

use chrono::Weekday;

use crate::common::{
    SUNDAY_FIRST, assert_grid_shape, assert_titles_on, at, date, month, test_event_draft,
    test_view,
};

#[test]
fn navigation_walks_a_whole_year() {
    let (_, mut view) = test_view(Weekday::Mon, at(date(2024, 1, 15), 10, 0));
    for m in 2..=12 {
        view.next_month();
        assert_eq!(view.month(), month(2024, m));
        assert_grid_shape(view.grid(), Weekday::Mon);
    }
    view.next_month();
    assert_eq!(view.month(), month(2025, 1));
}

#[test]
fn navigation_with_sunday_week_start() {
    let (_, mut view) = test_view(SUNDAY_FIRST, at(date(2024, 3, 4), 10, 0));
    assert_grid_shape(view.grid(), SUNDAY_FIRST);
    assert_eq!(view.grid().first_date(), Some(date(2024, 2, 25)));

    view.previous_month();
    assert_grid_shape(view.grid(), SUNDAY_FIRST);
    assert_eq!(view.grid().first_date(), Some(date(2024, 1, 28)));
}

#[test]
fn navigation_keeps_today_marker_only_in_current_month() {
    let (_, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 10, 0));
    let today_cells = |v: &monthcal_core::CalendarView| {
        v.grid().cells.iter().filter(|c| c.is_today).count()
    };
    assert_eq!(today_cells(&view), 1);

    view.next_month();
    view.next_month();
    assert_eq!(today_cells(&view), 0);

    view.go_to_today();
    assert_eq!(today_cells(&view), 1);
    assert_eq!(view.selected(), date(2024, 3, 4));
}

#[test]
fn navigation_shows_multi_day_event_across_month_boundary() {
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 10, 0));
    store.borrow_mut().add(test_event_draft(
        "Conference",
        at(date(2024, 3, 30), 9, 0),
        at(date(2024, 4, 2), 17, 0),
    ));

    assert_titles_on(&view, date(2024, 3, 31), &["Conference"]);
    // March 2024 ends on a Sunday, so April is not on the grid.
    assert_eq!(view.grid().last_date(), Some(date(2024, 3, 31)));

    view.next_month();
    assert_titles_on(&view, date(2024, 4, 2), &["Conference"]);
    assert_titles_on(&view, date(2024, 4, 3), &[]);
}
