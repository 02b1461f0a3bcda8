// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::datetime::{
    STABLE_FORMAT_DATETIME, combine_date_time, format_date, format_time, parse_time,
};
use crate::{Config, EventError};

/// Prefix added to the title of a duplicated event.
pub const COPY_PREFIX: &str = "Copy of ";

/// Suggested content types, the field itself accepts any tag.
pub const CONTENT_TYPES: &[&str] = &["post", "story", "reel", "video", "carousel", "article"];

/// A piece of content scheduled on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct CalendarEvent {
    id: String,
    title: String,
    description: Option<String>,
    date: NaiveDateTime,
    platform: Platform,
    content_type: String,
    status: EventStatus,
}

impl CalendarEvent {
    /// Builds an event from a validated draft.
    pub(crate) fn from_draft(id: String, draft: EventDraft) -> Result<Self, EventError> {
        let date = draft.resolve_date()?;
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.filter(|d| !d.trim().is_empty()),
            date,
            platform: draft.platform,
            content_type: draft.content_type,
            status: draft.status,
        })
    }

    /// A copy of this event with a new id, the title prefixed with "Copy of " and the date
    /// shifted forward by exactly 24 hours.
    pub(crate) fn duplicate(&self, id: String) -> Self {
        Self {
            id,
            title: format!("{COPY_PREFIX}{}", self.title),
            date: self.date + Duration::hours(24),
            ..self.clone()
        }
    }

    /// The unique identifier of the event.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional free text.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The scheduled date and time.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// The calendar day the event falls on.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// The time of day as `HH:MM`, always in sync with [`CalendarEvent::date`].
    pub fn time(&self) -> String {
        format_time(&self.date)
    }

    /// The target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The content type tag, e.g. `post` or `reel`.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The publication status.
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// Whether the event falls on the given calendar day.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.day() == day
    }
}

/// Serialized shape of an event, `time` is redundant with `date` and kept for readers.
#[derive(Debug, Serialize, Deserialize)]
struct EventRecord {
    id: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    date: String,
    #[serde(default)]
    time: Option<String>,
    platform: Platform,
    #[serde(rename = "type")]
    content_type: String,
    status: EventStatus,
}

impl From<CalendarEvent> for EventRecord {
    fn from(e: CalendarEvent) -> Self {
        Self {
            time: Some(e.time()),
            date: e.date.format(STABLE_FORMAT_DATETIME).to_string(),
            id: e.id,
            title: e.title,
            description: e.description,
            platform: e.platform,
            content_type: e.content_type,
            status: e.status,
        }
    }
}

impl TryFrom<EventRecord> for CalendarEvent {
    type Error = String;

    fn try_from(r: EventRecord) -> Result<Self, Self::Error> {
        let date = NaiveDateTime::parse_from_str(&r.date, STABLE_FORMAT_DATETIME)
            .map_err(|e| format!("invalid date '{}' of event {}: {e}", r.date, r.id))?;

        match &r.time {
            Some(time) if *time != format_time(&date) => {
                tracing::warn!(id = %r.id, %time, date = %r.date, "time out of sync with date, using date");
            }
            _ => {}
        }

        Ok(Self {
            id: r.id,
            title: r.title,
            description: r.description,
            date,
            platform: r.platform,
            content_type: r.content_type,
            status: r.status,
        })
    }
}

/// Form input for creating or editing an event, date and time are entered separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The display title, required.
    pub title: String,

    /// Optional free text.
    pub description: Option<String>,

    /// The selected date as `YYYY-MM-DD`, required.
    pub date: Option<String>,

    /// The time of day as `HH:MM`.
    pub time: String,

    /// The target platform.
    pub platform: Platform,

    /// The content type tag.
    pub content_type: String,

    /// The publication status.
    pub status: EventStatus,
}

impl EventDraft {
    /// An empty draft for the given day, filled with the configured defaults.
    pub fn new(config: &Config, day: Option<NaiveDate>) -> Self {
        Self {
            title: String::new(),
            description: None,
            date: day.map(|d| format_date(&d)),
            time: config.default_time.clone(),
            platform: config.default_platform,
            content_type: CONTENT_TYPES[0].to_string(),
            status: config.default_status,
        }
    }

    /// A draft prefilled from an existing event, used by the edit form.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: Some(format_date(&event.day())),
            time: event.time(),
            platform: event.platform,
            content_type: event.content_type.clone(),
            status: event.status,
        }
    }

    /// Checks the required fields and recombines date and time.
    pub fn resolve_date(&self) -> Result<NaiveDateTime, EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::MissingTitle);
        }

        let date = match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date,
            _ => return Err(EventError::MissingDate),
        };

        combine_date_time(date, &self.time)
    }
}

/// Partial changes to an event, unset fields keep their current value.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub platform: Option<Platform>,
    pub content_type: Option<String>,
    pub status: Option<EventStatus>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.platform.is_none()
            && self.content_type.is_none()
            && self.status.is_none()
    }

    /// Applies the patch on top of a draft.
    pub fn apply_to(self, draft: &mut EventDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(date) = self.date {
            draft.date = Some(date);
        }
        if let Some(time) = self.time {
            draft.time = time;
        }
        if let Some(platform) = self.platform {
            draft.platform = platform;
        }
        if let Some(content_type) = self.content_type {
            draft.content_type = content_type;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

/// The social network an event targets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Platform {
    #[default]
    Instagram,
    Twitter,
    Facebook,
    Linkedin,
    Tiktok,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Facebook,
        Platform::Linkedin,
        Platform::Tiktok,
        Platform::Youtube,
    ];

    /// The display color as a hex RGB string.
    pub fn color(&self) -> &'static str {
        match self {
            Platform::Instagram => "#ec4899",
            Platform::Twitter => "#3b82f6",
            Platform::Facebook => "#2563eb",
            Platform::Linkedin => "#1d4ed8",
            Platform::Tiktok => "#000000",
            Platform::Youtube => "#ef4444",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::Linkedin => "LinkedIn",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
        }
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_ref() == lower)
            .ok_or_else(|| format!("Unknown platform: {value}"))
    }
}

/// Narrows the visible events to one platform, or shows all of them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    pub fn matches(&self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(p) => *p == platform,
        }
    }
}

impl Display for PlatformFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformFilter::All => write!(f, "all"),
            PlatformFilter::Only(p) => write!(f, "{p}"),
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(PlatformFilter::All)
        } else {
            value.parse().map(PlatformFilter::Only)
        }
    }
}

/// The publication status of an event, any status may be set directly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventStatus {
    #[default]
    Scheduled,
    Published,
    Draft,
}

const STATUS_SCHEDULED: &str = "scheduled";
const STATUS_PUBLISHED: &str = "published";
const STATUS_DRAFT: &str = "draft";

impl AsRef<str> for EventStatus {
    fn as_ref(&self) -> &str {
        match self {
            EventStatus::Scheduled => STATUS_SCHEDULED,
            EventStatus::Published => STATUS_PUBLISHED,
            EventStatus::Draft => STATUS_DRAFT,
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_SCHEDULED => Ok(EventStatus::Scheduled),
            STATUS_PUBLISHED => Ok(EventStatus::Published),
            STATUS_DRAFT => Ok(EventStatus::Draft),
            _ => Err(()),
        }
    }
}

/// Ordering of the events inside a day bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOrder {
    /// Keep the order the events were added in.
    #[default]
    Insertion,

    /// Sort by time of day, ties keep insertion order.
    Time,
}

/// Events falling on `day` that pass the platform filter.
pub fn events_on_day<'a>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    filter: PlatformFilter,
    order: DayOrder,
) -> Vec<&'a CalendarEvent> {
    let mut bucket: Vec<_> = events
        .iter()
        .filter(|e| filter.matches(e.platform))
        .filter(|e| e.is_on(day))
        .collect();

    if order == DayOrder::Time {
        bucket.sort_by_key(|e| e.date.time());
    }
    bucket
}

/// Parses a time used as a default, e.g. from configuration.
pub(crate) fn validate_time(time: &str) -> Result<(), EventError> {
    parse_time(time).map(|_| ())
}
