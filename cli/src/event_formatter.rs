// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use postcal_core::{CalendarEvent, EventStatus, STABLE_FORMAT_DATE};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, platform_color};

const SHORT_ID_LEN: usize = 8;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(verbose: bool) -> Self {
        let mut columns = vec![
            EventColumn::Id { full: verbose },
            EventColumn::Date,
            EventColumn::Time,
            EventColumn::Platform,
            EventColumn::Status,
        ];
        if verbose {
            columns.push(EventColumn::ContentType);
        }
        columns.push(EventColumn::Title);

        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [CalendarEvent]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [CalendarEvent],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.events))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id { full: bool },
    Date,
    Time,
    Platform,
    Status,
    ContentType,
    Title,
}

impl TableColumn<CalendarEvent> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id { .. } => "ID",
            EventColumn::Date => "Date",
            EventColumn::Time => "Time",
            EventColumn::Platform => "Platform",
            EventColumn::Status => "Status",
            EventColumn::ContentType => "Type",
            EventColumn::Title => "Title",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a CalendarEvent) -> Cow<'a, str> {
        match self {
            EventColumn::Id { full: true } => event.id().into(),
            EventColumn::Id { full: false } => {
                event.id().chars().take(SHORT_ID_LEN).collect::<String>().into()
            }
            EventColumn::Date => event.day().format(STABLE_FORMAT_DATE).to_string().into(),
            EventColumn::Time => event.time().into(),
            EventColumn::Platform => event.platform().label().into(),
            EventColumn::Status => event.status().as_ref().to_string().into(),
            EventColumn::ContentType => event.content_type().into(),
            EventColumn::Title => event.title().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Time => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, event: &CalendarEvent) -> Option<Color> {
        match self {
            EventColumn::Platform => Some(platform_color(event.platform())),
            EventColumn::Status => match event.status() {
                EventStatus::Scheduled => Some(Color::Blue),
                EventStatus::Published => Some(Color::Green),
                EventStatus::Draft => Some(Color::Yellow),
            },
            _ => None,
        }
    }
}
