// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use monthcal_core::{Config, DisplayMonth};

use crate::tui;
use crate::util::{arg_month, get_month};

/// Opens the interactive month view.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmdTui {
    /// Month shown first, the current one if none.
    pub month: Option<DisplayMonth>,
}

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the month view (default)")
            .arg(arg_month())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: get_month(matches),
        }
    }

    pub fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(month = ?self.month, "opening month view");
        tui::run_calendar(config, self.month)
    }
}
