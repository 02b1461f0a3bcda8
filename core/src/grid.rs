// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::datetime::{first_day_of_month, list_events_for_month};

/// Number of columns in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// A Sunday-first month layout made of full weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    weeks: Vec<[GridCell; DAYS_PER_WEEK]>,
}

/// A single cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st or after the last day of the month.
    Blank,

    /// A day of the month.
    Day(DayCell),
}

/// A day in the grid with its highlight states, which are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
}

impl MonthGrid {
    /// Lays out the month containing `anchor`.
    pub fn new(anchor: NaiveDate, today: NaiveDate, selected: Option<NaiveDate>) -> Self {
        let first = first_day_of_month(anchor);
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut cells = vec![GridCell::Blank; leading];
        cells.extend(list_events_for_month(anchor).into_iter().map(|date| {
            GridCell::Day(DayCell {
                date,
                is_today: date == today,
                is_selected: selected == Some(date),
            })
        }));

        let trailing = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
        cells.extend(std::iter::repeat_n(GridCell::Blank, trailing));

        let weeks = cells
            .chunks_exact(DAYS_PER_WEEK)
            .map(|chunk| {
                let mut week = [GridCell::Blank; DAYS_PER_WEEK];
                week.copy_from_slice(chunk);
                week
            })
            .collect();

        Self { first, weeks }
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The week rows, each exactly seven cells.
    pub fn weeks(&self) -> &[[GridCell; DAYS_PER_WEEK]] {
        &self.weeks
    }

    /// Iterates over the day cells in ascending order, skipping blanks.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter_map(|cell| match cell {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        })
    }
}
