// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use postcal_core::{APP_NAME, Planner};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{
    CmdDay, CmdEventDelete, CmdEventDuplicate, CmdEventEdit, CmdEventList, CmdEventNew,
};
use crate::cmd_completion::CmdCompletion;
use crate::cmd_month::CmdMonth;
use crate::config::{parse_config, with_default_data_path};

/// Run the PostCal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

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

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Keep events in memory for this run only
    pub ephemeral: bool,

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
            .about("PostCal - Plan, schedule and review social media content from a calendar.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to month
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/postcal/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/postcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(--ephemeral "Keep events in memory for this run instead of the events file")
                    .global(true),
            )
            .subcommand(CmdMonth::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventDuplicate::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdCompletion::command())
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
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)),
            Some((CmdEventDuplicate::NAME, matches)) => {
                Duplicate(CmdEventDuplicate::from(matches))
            }
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdCompletion::NAME, matches)) => {
                Completion(CmdCompletion::from(matches))
            }
            None => Month(CmdMonth::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        let ephemeral = matches.get_flag("ephemeral");
        Ok(Cli {
            config,
            ephemeral,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.ephemeral).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the month grid
    Month(CmdMonth),

    /// Show the events of a day
    Day(CmdDay),

    /// List all events
    List(CmdEventList),

    /// Schedule a new event
    New(CmdEventNew),

    /// Edit an event
    Edit(CmdEventEdit),

    /// Copy an event to the next day
    Duplicate(CmdEventDuplicate),

    /// Delete an event
    Delete(CmdEventDelete),

    /// Generate shell completion
    Completion(CmdCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>, ephemeral: bool) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Month(a)     => Self::run_with(config, ephemeral, |x| a.run(x).boxed()).await,
            Day(a)       => Self::run_with(config, ephemeral, |x| a.run(x).boxed()).await,
            List(a)      => Self::run_with(config, ephemeral, |x| a.run(x).boxed()).await,
            New(a)       => Self::run_with(config, ephemeral, |x| a.run(x).boxed()).await,
            Edit(a)      => Self::run_with(config, ephemeral, |x| a.run(x).boxed()).await,
            Duplicate(a) => Self::run_with(config, ephemeral, |x| a.run(x).boxed()).await,
            Delete(a)    => Self::run_with(config, ephemeral, |x| a.run(x).boxed()).await,
            Completion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, ephemeral: bool, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Planner) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config).await?;
        if ephemeral {
            core_config.data_path = None;
        } else {
            core_config = with_default_data_path(core_config)?;
        }

        let mut planner = Planner::new(core_config).await?;
        f(&mut planner).await
    }
}
