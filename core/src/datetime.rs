// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

/// Format of date-and-time form inputs, e.g. `2024-03-04T09:30`.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats a timestamp for a date-and-time input, empty if absent.
pub fn format_input(dt: Option<NaiveDateTime>) -> String {
    dt.map(|dt| dt.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parses a date-and-time input. Empty or malformed input is treated as absent.
pub fn parse_input(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    match NaiveDateTime::parse_from_str(s, INPUT_FORMAT) {
        Ok(dt) => Some(dt),
        Err(e) => {
            tracing::debug!(input = s, err = %e, "failed to parse date-time input");
            None
        }
    }
}

/// Drops seconds and sub-second precision.
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(dt)
}

/// A month of a year, the unit the calendar displays at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayMonth {
    year: i32,
    month: u32,
}

impl DisplayMonth {
    /// Returns `None` if the month is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::containing)
    }

    /// The month the given date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month, or the same month at the end of the supported range.
    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(*self)
    }

    /// The preceding month, or the same month at the start of the supported range.
    pub fn previous(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(*self)
    }
}

impl fmt::Display for DisplayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for DisplayMonth {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ParseMonthError(s.to_owned()))?;

        let year: i32 = year.parse().map_err(|_| ParseMonthError(s.to_owned()))?;
        let month: u32 = month.parse().map_err(|_| ParseMonthError(s.to_owned()))?;
        Self::new(year, month).ok_or_else(|| ParseMonthError(s.to_owned()))
    }
}

impl serde::Serialize for DisplayMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month {0:?}, expected YYYY-MM")]
pub struct ParseMonthError(String);
