// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use chrono::{Datelike, NaiveDate, Weekday};
use monthcal_core::{CalendarGrid, CalendarView};

/// Asserts the structural properties every month grid has.
///
/// # Panics
///
/// Panics if the grid is not whole weeks, does not start on `week_start`,
/// or does not list every day of its month exactly once.
pub fn assert_grid_shape(grid: &CalendarGrid, week_start: Weekday) {
    let month = grid.month;
    assert!(!grid.cells.is_empty(), "{month}: empty grid");
    assert_eq!(grid.cells.len() % 7, 0, "{month}: partial week");
    assert_eq!(
        grid.cells[0].date.weekday(),
        week_start,
        "{month}: wrong first column"
    );

    for pair in grid.cells.windows(2) {
        assert_eq!(
            pair[0].date.succ_opt(),
            Some(pair[1].date),
            "{month}: dates not consecutive"
        );
    }

    let in_month: Vec<u32> = grid
        .cells
        .iter()
        .filter(|c| c.in_month)
        .map(|c| c.date.day())
        .collect();
    let expected: Vec<u32> = (1..=month.last_day().day()).collect();
    assert_eq!(in_month, expected, "{month}: month days");
}

/// Asserts the titles shown on `date`, in order.
///
/// # Panics
///
/// Panics if the titles differ.
#[allow(dead_code)]
pub fn assert_titles_on(view: &CalendarView, date: NaiveDate, titles: &[&str]) {
    let actual: Vec<String> = view.events_on(date).into_iter().map(|e| e.title).collect();
    assert_eq!(actual, titles, "titles on {date}");
}
