// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};

use crate::datetime::{first_day_of_month, format_date, last_day_of_month};
use crate::event::CONTENT_TYPES;
use crate::{EventDraft, EventStatus, Platform};

/// A provider of sample events, used to fill an empty calendar.
pub trait SampleSource {
    /// Drafts to create, relative to `today`.
    fn samples(&self, today: NaiveDate) -> Vec<EventDraft>;
}

const DEMO_TITLES: &[&str] = &[
    "Product launch teaser",
    "Behind the scenes",
    "Customer spotlight",
    "Weekly tips thread",
    "Team introduction",
    "Industry news roundup",
    "Tutorial walkthrough",
    "Community Q&A",
    "Throwback post",
    "Holiday greetings",
    "Poll: what's next?",
    "Case study",
];

const DEMO_TIMES: &[&str] = &["09:00", "12:30", "15:00", "18:00"];

const DEMO_STATUSES: &[EventStatus] = &[
    EventStatus::Scheduled,
    EventStatus::Scheduled,
    EventStatus::Draft,
    EventStatus::Published,
];

/// Spreads a fixed set of titles over the current month, cycling platforms, content
/// types, times and statuses. The same `today` always yields the same drafts.
#[derive(Debug, Clone, Copy)]
pub struct DemoSamples {
    count: usize,
}

impl DemoSamples {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for DemoSamples {
    fn default() -> Self {
        Self::new(DEMO_TITLES.len())
    }
}

impl SampleSource for DemoSamples {
    fn samples(&self, today: NaiveDate) -> Vec<EventDraft> {
        let first = first_day_of_month(today);
        let span = last_day_of_month(today).signed_duration_since(first).num_days() as u64 + 1;

        (0..self.count)
            .map(|i| {
                let offset = (i as u64 * 5 + i as u64 / 3) % span;
                let day = first.checked_add_days(Days::new(offset)).unwrap_or(first);
                EventDraft {
                    title: DEMO_TITLES[i % DEMO_TITLES.len()].to_string(),
                    description: None,
                    date: Some(format_date(&day)),
                    time: DEMO_TIMES[i % DEMO_TIMES.len()].to_string(),
                    platform: Platform::ALL[i % Platform::ALL.len()],
                    content_type: CONTENT_TYPES[i % CONTENT_TYPES.len()].to_string(),
                    status: DEMO_STATUSES[i % DEMO_STATUSES.len()],
                }
            })
            .collect()
    }
}
