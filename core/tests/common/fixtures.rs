// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use postcal_core::{
    Config, DayOrder, EventDraft, EventStatus, MemoryRepository, Planner, Platform,
};

/// Creates a test configuration persisting to the given file.
#[must_use]
pub fn test_config(data_path: Option<&Path>) -> Config {
    Config {
        data_path: data_path.map(Path::to_path_buf),
        default_time: "09:00".to_string(),
        default_platform: Platform::Instagram,
        default_status: EventStatus::Scheduled,
        day_order: DayOrder::Insertion,
        seed_demo: false,
    }
}

/// Creates a planner backed by a fresh in-memory repository.
#[must_use]
pub fn memory_planner() -> Planner {
    Planner::with_repository(test_config(None), Arc::new(MemoryRepository::new()))
}

/// Creates a test draft on the given date and time.
///
/// # Example
///
/// ```ignore
/// let draft = test_event_draft("Launch Post", "2024-06-15", "09:00", Platform::Instagram);
/// ```
#[must_use]
pub fn test_event_draft(title: &str, date: &str, time: &str, platform: Platform) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        description: None,
        date: Some(date.to_string()),
        time: time.to_string(),
        platform,
        content_type: "post".to_string(),
        status: EventStatus::Scheduled,
    }
}

/// Shorthand for a calendar date.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
