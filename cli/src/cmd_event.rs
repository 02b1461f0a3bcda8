// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use postcal_core::{
    CalendarEvent, Dialog, EventPatch, EventStatus, Planner, Platform, PlatformFilter,
    STABLE_FORMAT_DATE,
};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::prompt;
use crate::util::{OutputFormat, parse_day};

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub platform: Option<Platform>,
    pub content_type: Option<String>,
    pub status: Option<EventStatus>,

    pub interactive: bool,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Schedule a new event, opens a form when no field is given")
            .arg(EventArgs::title(true))
            .arg(EventArgs::description())
            .arg(EventArgs::date())
            .arg(EventArgs::time())
            .arg(EventArgs::platform())
            .arg(EventArgs::content_type())
            .arg(EventArgs::status())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let title = EventArgs::get_title(matches);
        let description = EventArgs::get_description(matches);
        let date = EventArgs::get_date(matches);
        let time = EventArgs::get_time(matches);
        let platform = EventArgs::get_platform(matches);
        let content_type = EventArgs::get_content_type(matches);
        let status = EventArgs::get_status(matches);

        let interactive = title.is_none()
            && description.is_none()
            && date.is_none()
            && time.is_none()
            && platform.is_none()
            && content_type.is_none()
            && status.is_none();

        Self {
            title,
            description,
            date,
            time,
            platform,
            content_type,
            status,

            interactive,
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let event = if self.interactive {
            let mut dialog = Dialog::new();
            dialog.open_create(planner, Some(planner.today()));
            match prompt::submit_form(planner, &mut dialog).await? {
                Some(event) => event,
                None => return Ok(()),
            }
        } else {
            let date = match &self.date {
                Some(date) => Some(parse_day(planner.today(), date)?),
                None => None,
            };
            let mut draft = planner.default_draft(date);
            let patch = EventPatch {
                title: self.title,
                description: self.description.map(|d| (!d.is_empty()).then_some(d)),
                date: None,
                time: self.time,
                platform: self.platform,
                content_type: self.content_type,
                status: self.status,
            };
            patch.apply_to(&mut draft);
            planner.create_event(draft).await?
        };

        print_events(&[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub platform: Option<Platform>,
    pub content_type: Option<String>,
    pub status: Option<EventStatus>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event, opens a form when no field is given")
            .arg(EventArgs::id())
            .arg(EventArgs::title(false))
            .arg(EventArgs::description())
            .arg(EventArgs::date())
            .arg(EventArgs::time())
            .arg(EventArgs::platform())
            .arg(EventArgs::content_type())
            .arg(EventArgs::status())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            title: EventArgs::get_title(matches),
            description: EventArgs::get_description(matches),
            date: EventArgs::get_date(matches),
            time: EventArgs::get_time(matches),
            platform: EventArgs::get_platform(matches),
            content_type: EventArgs::get_content_type(matches),
            status: EventArgs::get_status(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let event = planner.find_event(&self.id).await?;

        let date = match &self.date {
            Some(date) => Some(parse_day(planner.today(), date)?),
            None => None,
        };
        let patch = EventPatch {
            title: self.title,
            description: self.description.map(|d| (!d.is_empty()).then_some(d)),
            date: date.map(|d| d.format(STABLE_FORMAT_DATE).to_string()),
            time: self.time,
            platform: self.platform,
            content_type: self.content_type,
            status: self.status,
        };

        let event = if patch.is_empty() {
            let mut dialog = Dialog::new();
            dialog.open_edit(&event);
            match prompt::submit_form(planner, &mut dialog).await? {
                Some(event) => event,
                None => return Ok(()),
            }
        } else {
            planner.patch_event(event.id(), patch).await?
        };

        print_events(&[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDuplicate {
    pub id: String,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventDuplicate {
    pub const NAME: &str = "duplicate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("dup")
            .about("Copy an event to the following day")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "duplicating event...");
        let event = planner.find_event(&self.id).await?;
        let copy = planner.duplicate_event(&event).await?;
        print_events(&[copy], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: String,
    pub yes: bool,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event permanently")
            .arg(EventArgs::id())
            .arg(arg!(-y --yes "Delete without asking for confirmation"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            yes: matches.get_flag("yes"),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let event = planner.find_event(&self.id).await?;

        let deleted = if self.yes {
            let mut dialog = Dialog::new();
            dialog.request_delete(event.id());
            dialog.confirm_delete(planner).await?
        } else {
            prompt::confirm_and_delete(planner, &mut Dialog::new(), &event).await?
        };

        if deleted {
            println!("Deleted \"{}\"", event.title());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub filter: PlatformFilter,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all events in the order they were added")
            .arg(CommonArgs::platform_filter())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            filter: CommonArgs::get_platform_filter(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events: Vec<_> = planner
            .list_events()
            .await?
            .into_iter()
            .filter(|e| self.filter.matches(e.platform()))
            .collect();

        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }
        print_events(&events, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDay {
    pub day: Option<String>,
    pub filter: PlatformFilter,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the events of a day")
            .arg(arg!([DAY] "The day to show: YYYY-MM-DD, today, tomorrow or yesterday"))
            .arg(CommonArgs::platform_filter())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: matches.get_one::<String>("DAY").cloned(),
            filter: CommonArgs::get_platform_filter(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing day...");
        let day = match &self.day {
            Some(day) => parse_day(planner.today(), day)?,
            None => planner.today(),
        };

        planner.set_filter(self.filter);
        print_day(planner, day, self.output_format, self.verbose).await
    }
}

/// Prints the bucket of a day, honoring the planner's filter.
pub async fn print_day(
    planner: &Planner,
    day: NaiveDate,
    output_format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn Error>> {
    let events = planner.day_events(day).await?;
    if output_format == OutputFormat::Table {
        let heading = format!("Events on {}", day.format("%A, %B %-d, %Y"));
        println!("{}", heading.bold());
        if events.is_empty() {
            println!("{}", "No events scheduled".italic());
            return Ok(());
        }
    }
    print_events(&events, output_format, verbose);
    Ok(())
}

fn print_events(events: &[CalendarEvent], output_format: OutputFormat, verbose: bool) {
    let formatter = EventFormatter::new(verbose).with_output_format(output_format);
    print!("{}", formatter.format(events));
}
