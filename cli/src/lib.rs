// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_completion;
mod cmd_event;
mod cmd_month;
mod config;
mod event_formatter;
mod month_view;
mod prompt;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::util::OutputFormat;
