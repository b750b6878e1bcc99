// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use monthcal_core::{APP_NAME, Config};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_grid::CmdGrid;
use crate::cmd_tui::CmdTui;
use crate::config::parse_config;

/// Environment variable holding the log filter, e.g. `MONTHCAL_LOG=debug`.
const LOG_ENV: &str = "MONTHCAL_LOG";

/// Run the monthcal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr so the TUI keeps the terminal.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A month-view calendar in your terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to tui
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/monthcal/config.toml on Linux and \
MacOS, %APPDATA%/monthcal/config.toml on Windows. Can also be set with MONTHCAL_CONFIG.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdTui::command())
            .subcommand(CmdGrid::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            Some((CmdGrid::NAME, matches)) => Grid(CmdGrid::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Tui(CmdTui::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the month view
    Tui(CmdTui),

    /// Print the day grid of a month
    Grid(CmdGrid),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Tui(a) => a.run(load_config(config).await?),
            Grid(a) => a.run(&load_config(config).await?),
            GenerateCompletion(a) => a.run(),
        }
    }
}

async fn load_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    tracing::debug!("parsing configuration...");
    parse_config(path).await
}

#[cfg(test)]
mod tests {
    use monthcal_core::DisplayMonth;

    use super::*;
    use crate::{cmd_generate_completion::Shell, util::ArgOutputFormat};

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Tui(_)));
    }

    #[test]
    fn test_parse_default_tui() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        match cli.command {
            Commands::Tui(cmd) => assert_eq!(cmd.month, None),
            _ => panic!("Expected Tui command"),
        }
    }

    #[test]
    fn test_parse_tui_month() {
        let cli = Cli::try_parse_from(vec!["test", "tui", "--month", "2024-03"]).unwrap();
        match cli.command {
            Commands::Tui(cmd) => assert_eq!(cmd.month, DisplayMonth::new(2024, 3)),
            _ => panic!("Expected Tui command"),
        }
    }

    #[test]
    fn test_parse_tui_rejects_bad_month() {
        assert!(Cli::try_parse_from(vec!["test", "tui", "--month", "2024-13"]).is_err());
        assert!(Cli::try_parse_from(vec!["test", "tui", "--month", "march"]).is_err());
    }

    #[test]
    fn test_parse_grid() {
        let args = vec!["test", "grid", "--month", "2024-02", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Grid(cmd) => {
                assert_eq!(cmd.month, DisplayMonth::new(2024, 2));
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected Grid command"),
        }
    }

    #[test]
    fn test_parse_grid_defaults() {
        let cli = Cli::try_parse_from(vec!["test", "grid"]).unwrap();
        match cli.command {
            Commands::Grid(cmd) => {
                assert_eq!(cmd.month, None);
                assert_eq!(cmd.output_format, ArgOutputFormat::Table);
            }
            _ => panic!("Expected Grid command"),
        }
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
