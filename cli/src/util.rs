// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Days, NaiveDate};
use colored::Color;
use postcal_core::{Platform, parse_date};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a day: `today`, `tomorrow`, `yesterday` or `YYYY-MM-DD`.
pub fn parse_day(today: NaiveDate, s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    let day = match s.trim().to_lowercase().as_str() {
        "today" => today,
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .ok_or("Date out of range")?,
        "yesterday" => today
            .checked_sub_days(Days::new(1))
            .ok_or("Date out of range")?,
        other => parse_date(other)?,
    };
    Ok(day)
}

/// Parses a month anchor: `YYYY-MM`, or anything accepted by [`parse_day`].
pub fn parse_month(today: NaiveDate, s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    let s = s.trim();
    if s.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Ok(date);
        }
    }
    parse_day(today, s).map_err(|_| {
        format!("Invalid month '{s}'. Expected format: YYYY-MM, YYYY-MM-DD or today").into()
    })
}

/// Terminal color of a platform, taken from its display color.
pub fn platform_color(platform: Platform) -> Color {
    let hex = platform.color().trim_start_matches('#');
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    match platform {
        // pure black disappears on dark terminals
        Platform::Tiktok => Color::BrightWhite,
        _ => Color::TrueColor {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        },
    }
}
