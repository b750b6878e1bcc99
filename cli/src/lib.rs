// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_generate_completion;
mod cmd_grid;
mod cmd_tui;
mod config;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_grid::CmdGrid;
pub use crate::cmd_tui::CmdTui;
pub use crate::config::parse_config;
pub use crate::util::ArgOutputFormat;
