// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::DisplayMonth;

/// Number of columns in the grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Enumerates the dates shown for `month`.
///
/// The sequence starts on the nearest `week_start` on or before the first of
/// the month, covers every day of the month, and is padded with the days
/// that follow until its length is a multiple of seven.
pub fn grid_dates(month: DisplayMonth, week_start: Weekday) -> Vec<NaiveDate> {
    let first = month.first_day();
    let last = month.last_day();

    let lead =
        (7 + first.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let start = first
        .checked_sub_days(Days::new(u64::from(lead)))
        .unwrap_or(first);

    let mut dates: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= last).collect();

    let mut next = last.succ_opt();
    while dates.len() % DAYS_PER_WEEK != 0 {
        let Some(d) = next else { break };
        dates.push(d);
        next = d.succ_opt();
    }
    dates
}

/// One day of the rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GridCell {
    pub date: NaiveDate,

    /// Whether the day belongs to the displayed month.
    pub in_month: bool,

    pub is_today: bool,
}

/// The day cells of a displayed month, row by row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CalendarGrid {
    pub month: DisplayMonth,
    #[serde(serialize_with = "serialize_weekday")]
    pub week_start: Weekday,
    pub cells: Vec<GridCell>,
}

impl CalendarGrid {
    pub fn build(month: DisplayMonth, week_start: Weekday, today: NaiveDate) -> Self {
        let cells = grid_dates(month, week_start)
            .into_iter()
            .map(|date| GridCell {
                date,
                in_month: month.contains(date),
                is_today: date == today,
            })
            .collect();

        tracing::debug!(%month, ?week_start, "calendar grid built");
        Self {
            month,
            week_start,
            cells,
        }
    }

    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    /// Index of the cell showing `date`, if it is on the grid.
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.cells.iter().position(|c| c.date == date)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cells.first().map(|c| c.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cells.last().map(|c| c.date)
    }

    /// Weekdays in column order.
    pub fn weekdays(&self) -> [Weekday; DAYS_PER_WEEK] {
        let mut days = [self.week_start; DAYS_PER_WEEK];
        for i in 1..DAYS_PER_WEEK {
            days[i] = days[i - 1].succ();
        }
        days
    }
}

fn serialize_weekday<S>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(day)
}
