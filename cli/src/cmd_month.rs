// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Datelike, NaiveDate};
use clap::{ArgMatches, Command, arg};
use postcal_core::{Planner, PlatformFilter, events_on_day};

use crate::arg::CommonArgs;
use crate::cmd_event::print_day;
use crate::month_view::MonthView;
use crate::util::{OutputFormat, parse_day, parse_month};

/// Shows the month grid, the default command.
#[derive(Debug, Clone)]
pub struct CmdMonth {
    pub month: Option<String>,
    pub select: Option<String>,
    pub filter: PlatformFilter,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Default for CmdMonth {
    fn default() -> Self {
        Self {
            month: None,
            select: None,
            filter: PlatformFilter::All,
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the calendar of a month, with the events of the selected day")
            .arg(arg!([MONTH] "The month to show: YYYY-MM, YYYY-MM-DD or today"))
            .arg(arg!(-s --select <DAY> "The day to list below the grid, defaults to today"))
            .arg(CommonArgs::platform_filter())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: matches.get_one::<String>("MONTH").cloned(),
            select: matches.get_one::<String>("select").cloned(),
            filter: CommonArgs::get_platform_filter(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month...");
        let today = planner.today();
        let anchor = match &self.month {
            Some(month) => parse_month(today, month)?,
            None => today,
        };
        let selected = match &self.select {
            Some(day) => Some(parse_day(today, day)?),
            None if same_month(anchor, today) => Some(today),
            None => None,
        };

        planner.set_filter(self.filter);
        let events = planner.list_events().await?;
        let order = planner.config().day_order;
        let days = planner.list_events_for_month(anchor);

        if self.output_format == OutputFormat::Json {
            let in_month: Vec<_> = days
                .iter()
                .flat_map(|day| events_on_day(&events, *day, planner.filter(), order))
                .collect();
            println!("{}", serde_json::to_string_pretty(&in_month)?);
            return Ok(());
        }

        let grid = planner.month_grid(anchor, selected);
        let buckets = days
            .iter()
            .map(|day| (*day, events_on_day(&events, *day, planner.filter(), order)));
        println!("{}", MonthView::new(&grid, buckets));

        if let Some(day) = selected {
            print_day(planner, day, self.output_format, self.verbose).await?;
        }
        Ok(())
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
