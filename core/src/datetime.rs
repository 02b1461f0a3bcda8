// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::EventError;

/// NOTE: Used for persisting events, so it should be stable across different runs.
pub const STABLE_FORMAT_DATE: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_TIME: &str = "%H:%M";
pub const STABLE_FORMAT_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, EventError> {
    NaiveDate::parse_from_str(s.trim(), STABLE_FORMAT_DATE)
        .map_err(|_| EventError::InvalidDate(s.to_string()))
}

/// Parses a `HH:MM` time, seconds are not accepted.
pub fn parse_time(s: &str) -> Result<NaiveTime, EventError> {
    NaiveTime::parse_from_str(s.trim(), STABLE_FORMAT_TIME)
        .map_err(|_| EventError::InvalidTime(s.to_string()))
}

/// Combines a separately entered date string and time string into one timestamp.
pub fn combine_date_time(date: &str, time: &str) -> Result<NaiveDateTime, EventError> {
    Ok(NaiveDateTime::new(parse_date(date)?, parse_time(time)?))
}

/// Formats the time-of-day part as `HH:MM`.
pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format(STABLE_FORMAT_TIME).to_string()
}

/// Formats the date part as `YYYY-MM-DD`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(STABLE_FORMAT_DATE).to_string()
}

/// The first day of the month containing `anchor`.
pub fn first_day_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).unwrap_or(anchor)
}

/// The last day of the month containing `anchor`.
pub fn last_day_of_month(anchor: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(anchor);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        // only reachable at the very end of chrono's range
        .unwrap_or(NaiveDate::MAX)
}

/// Every day of the month containing `anchor`, in ascending order.
pub fn list_events_for_month(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = first_day_of_month(anchor);
    let last = last_day_of_month(anchor);
    first.iter_days().take_while(|d| *d <= last).collect()
}
