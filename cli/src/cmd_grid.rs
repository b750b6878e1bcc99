// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt};

use chrono::{Datelike, Local};
use clap::{ArgMatches, Command};
use colored::Colorize;
use monthcal_core::locale::{month_title, weekday_label};
use monthcal_core::{CalendarGrid, Config, DisplayMonth, GridCell};

use crate::util::{ArgOutputFormat, arg_month, get_month};

const CELL_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct CmdGrid {
    pub month: Option<DisplayMonth>,
    pub output_format: ArgOutputFormat,
}

impl CmdGrid {
    pub const NAME: &str = "grid";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the day grid of a month")
            .arg(arg_month())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: get_month(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing grid...");
        let today = Local::now().date_naive();
        let month = self.month.unwrap_or_else(|| DisplayMonth::containing(today));
        let grid = CalendarGrid::build(month, config.week_start, today);

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
            ArgOutputFormat::Table => print!("{}", GridFormatter::new(&grid).with_colors(true)),
        }
        Ok(())
    }
}

/// Plain-text rendering of a month grid, one week per line.
#[derive(Debug)]
pub struct GridFormatter<'a> {
    grid: &'a CalendarGrid,
    colors: bool,
}

impl<'a> GridFormatter<'a> {
    pub fn new(grid: &'a CalendarGrid) -> Self {
        Self { grid, colors: false }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn cell(&self, cell: &GridCell) -> String {
        let text = format!("{:>CELL_WIDTH$}", cell.date.day());
        if !self.colors {
            text
        } else if cell.is_today {
            text.reversed().bold().to_string()
        } else if !cell.in_month {
            text.dimmed().to_string()
        } else {
            text
        }
    }
}

impl fmt::Display for GridFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = month_title(self.grid.month);
        if self.colors {
            writeln!(f, "{}", title.bold())?;
        } else {
            writeln!(f, "{title}")?;
        }

        let header: Vec<String> = self
            .grid
            .weekdays()
            .iter()
            .map(|d| format!("{:>CELL_WIDTH$}", weekday_label(*d)))
            .collect();
        writeln!(f, "{}", header.join(" "))?;

        for week in self.grid.weeks() {
            let cells: Vec<String> = week.iter().map(|c| self.cell(c)).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
