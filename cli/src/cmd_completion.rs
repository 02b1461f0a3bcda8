// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use clap_complete::{Shell, generate};
use clap_complete_nushell::Nushell;

use crate::Cli;

const SHELLS: [&str; 5] = ["bash", "fish", "nushell", "powershell", "zsh"];

/// Prints a completion script for `postcal` to stdout.
#[derive(Debug, Clone)]
pub struct CmdCompletion {
    pub shell: String,
}

impl CmdCompletion {
    pub const NAME: &str = "completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a shell completion script")
            .hide(true)
            .arg(arg!(<SHELL> "The shell to complete for").value_parser(SHELLS))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<String>("SHELL")
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing shell completion...");
        write_completion(&self.shell, &mut io::stdout())
    }
}

fn write_completion(shell: &str, buf: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    match shell {
        "nushell" => generate(Nushell {}, &mut cmd, name, buf),
        other => generate(other.parse::<Shell>()?, &mut cmd, name, buf),
    }
    Ok(())
}
