// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! PostCal core: scheduled social media content on a month calendar.

mod config;
mod datetime;
mod dialog;
mod error;
mod event;
mod grid;
mod planner;
mod repository;
mod sample;

pub use crate::config::{APP_NAME, Config, expand_path, get_state_dir};
pub use crate::datetime::{
    STABLE_FORMAT_DATE, STABLE_FORMAT_TIME, combine_date_time, first_day_of_month,
    last_day_of_month, list_events_for_month, parse_date, parse_time,
};
pub use crate::dialog::{Dialog, DialogMode};
pub use crate::error::EventError;
pub use crate::event::{
    COPY_PREFIX, CONTENT_TYPES, CalendarEvent, DayOrder, EventDraft, EventPatch, EventStatus,
    Platform, PlatformFilter, events_on_day,
};
pub use crate::grid::{DAYS_PER_WEEK, DayCell, GridCell, MonthGrid};
pub use crate::planner::Planner;
pub use crate::repository::{EventRepository, JsonFileRepository, MemoryRepository};
pub use crate::sample::{DemoSamples, SampleSource};
