// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use chrono::{Duration, Weekday};
use serde::de;

use crate::DEFAULT_COLOR;
use crate::color::parse_hex_color;

/// The name of the application.
pub const APP_NAME: &str = "monthcal";

/// Configuration for the calendar.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// First column of the month grid.
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,

    /// Color of new events, as `#rrggbb`.
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Length of new events.
    #[serde(default)]
    pub default_duration: ConfigDuration,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) {
        if parse_hex_color(&self.default_color).is_none() {
            tracing::warn!(
                color = %self.default_color,
                "invalid default color, expected #rrggbb, falling back to {DEFAULT_COLOR}"
            );
            self.default_color = default_color();
        }

        if self.default_duration.0 < Duration::zero() {
            tracing::warn!("negative default duration, falling back to 1h");
            self.default_duration = ConfigDuration::default();
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            default_color: default_color(),
            default_duration: ConfigDuration::default(),
        }
    }
}

fn default_week_start() -> Weekday {
    Weekday::Mon
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDuration(Duration);

impl ConfigDuration {
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl Default for ConfigDuration {
    fn default() -> Self {
        Self(Duration::hours(1))
    }
}

impl From<Duration> for ConfigDuration {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl<'de> serde::Deserialize<'de> for ConfigDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DurationVisitor;

        impl de::Visitor<'_> for DurationVisitor {
            type Value = ConfigDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str(r#"a duration string like "HH:MM", "1d", "24h", "60m", or "1800s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_duration(value)
                    .map(ConfigDuration)
                    .map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
fn parse_duration(s: &str) -> Result<Duration, Box<dyn Error>> {
    if let Some((h, m)) = s.split_once(':') {
        let hours: i64 = h.trim().parse()?;
        let minutes: i64 = m.trim().parse()?;
        Ok(Duration::minutes(hours * 60 + minutes))
    } else if let Some(rest) = s.strip_suffix("d") {
        let days: i64 = rest.trim().parse()?;
        Ok(Duration::days(days))
    } else if let Some(rest) = s.strip_suffix("h") {
        let hours: i64 = rest.trim().parse()?;
        Ok(Duration::hours(hours))
    } else if let Some(rest) = s.strip_suffix("m") {
        let minutes: i64 = rest.trim().parse()?;
        Ok(Duration::minutes(minutes))
    } else if let Some(rest) = s.strip_suffix("s") {
        let seconds: i64 = rest.trim().parse()?;
        Ok(Duration::seconds(seconds))
    } else {
        Err(format!("Invalid duration format: {s}").into())
    }
}
