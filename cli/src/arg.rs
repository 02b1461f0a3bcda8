// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use postcal_core::{EventStatus, Platform, PlatformFilter};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn platform_filter() -> Arg {
        arg!(-p --platform <PLATFORM> "Only show events of this platform, or 'all'")
            .value_parser(|s: &str| s.parse::<PlatformFilter>())
            .default_value("all")
    }

    pub fn get_platform_filter(matches: &ArgMatches) -> PlatformFilter {
        matches
            .get_one("platform")
            .copied()
            .unwrap_or(PlatformFilter::All)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("id")
            .expect("id is required")
            .clone()
    }

    pub fn title(positional: bool) -> Arg {
        if positional {
            arg!(title: <TITLE> "Title of the event").required(false)
        } else {
            arg!(title: -t --title <TITLE> "Title of the event")
        }
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn description() -> Arg {
        arg!(--description <DESCRIPTION> "Description of the event, empty to clear")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn date() -> Arg {
        arg!(--date <DATE> "Date of the event: YYYY-MM-DD, today, tomorrow or yesterday")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn time() -> Arg {
        arg!(--time <TIME> "Time of the event, as HH:MM")
    }

    pub fn get_time(matches: &ArgMatches) -> Option<String> {
        matches.get_one("time").cloned()
    }

    pub fn platform() -> Arg {
        arg!(--platform <PLATFORM> "Platform of the event").value_parser(value_parser!(Platform))
    }

    pub fn get_platform(matches: &ArgMatches) -> Option<Platform> {
        matches.get_one("platform").copied()
    }

    pub fn content_type() -> Arg {
        Arg::new("content_type")
            .long("type")
            .value_name("TYPE")
            .help("Content type, e.g. post, story, reel, video")
    }

    pub fn get_content_type(matches: &ArgMatches) -> Option<String> {
        matches.get_one("content_type").cloned()
    }

    pub fn status() -> Arg {
        arg!(--status <STATUS> "Status of the event").value_parser(value_parser!(EventStatus))
    }

    pub fn get_status(matches: &ArgMatches) -> Option<EventStatus> {
        matches.get_one("status").copied()
    }
}
