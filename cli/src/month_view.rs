// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use postcal_core::{CalendarEvent, DayCell, GridCell, MonthGrid, Platform};

use crate::util::platform_color;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const CELL_WIDTH: usize = 3;
const MARKER: &str = "•";

/// A month grid drawn for the terminal, marking the days that have events.
#[derive(Debug)]
pub struct MonthView<'a> {
    grid: &'a MonthGrid,
    platforms: HashMap<NaiveDate, Vec<Platform>>,
}

impl<'a> MonthView<'a> {
    /// Creates the view, `buckets` holds the (already filtered) events of each day.
    pub fn new<'e>(
        grid: &'a MonthGrid,
        buckets: impl IntoIterator<Item = (NaiveDate, Vec<&'e CalendarEvent>)>,
    ) -> Self {
        let platforms = buckets
            .into_iter()
            .filter(|(_, events)| !events.is_empty())
            .map(|(day, events)| (day, events.iter().map(|e| e.platform()).collect()))
            .collect();

        Self { grid, platforms }
    }

    fn fmt_day(&self, cell: &DayCell) -> String {
        let mut number = format!("{:>2}", cell.date.day()).normal();
        if cell.is_today {
            number = number.bold().underline();
        }
        if cell.is_selected {
            number = number.reversed();
        }

        let marker = match self.platforms.get(&cell.date).and_then(|p| p.first()) {
            Some(platform) => MARKER.color(platform_color(*platform)).to_string(),
            None => " ".to_string(),
        };
        format!("{number}{marker}")
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = WEEKDAYS.len() * (CELL_WIDTH + 1) - 1;
        let title = self.grid.first_day().format("%B %Y").to_string();
        writeln!(f, "{:^width$}", title.bold())?;

        let header: Vec<_> = WEEKDAYS.iter().map(|d| format!("{d:<CELL_WIDTH$}")).collect();
        writeln!(f, "{}", header.join(" ").trim_end().dimmed())?;

        for week in self.grid.weeks() {
            let cells: Vec<_> = week
                .iter()
                .map(|cell| match cell {
                    GridCell::Blank => " ".repeat(CELL_WIDTH),
                    GridCell::Day(day) => self.fmt_day(day),
                })
                .collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}
