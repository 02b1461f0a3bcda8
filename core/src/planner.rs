// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::event::events_on_day;
use crate::repository::{EventRepository, JsonFileRepository, MemoryRepository};
use crate::sample::{DemoSamples, SampleSource};
use crate::{
    CalendarEvent, Config, EventDraft, EventError, EventPatch, MonthGrid, PlatformFilter,
    datetime,
};

/// The content calendar: owns the events and projects them onto days and months.
#[derive(Debug, Clone)]
pub struct Planner {
    now: NaiveDateTime,
    config: Config,
    repo: Arc<dyn EventRepository>,
    filter: PlatformFilter,
}

impl Planner {
    /// Creates a planner from the configuration, opening the JSON file when one is set.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let repo: Arc<dyn EventRepository> = match &config.data_path {
            Some(path) => {
                let repo = JsonFileRepository::open(path)
                    .await
                    .map_err(|e| format!("Failed to open events file: {e}"))?;
                Arc::new(repo)
            }
            None => {
                tracing::debug!("no data path configured, keeping events in memory");
                Arc::new(MemoryRepository::new())
            }
        };

        let seed_demo = config.seed_demo;
        let that = Self::with_repository(config, repo);
        if seed_demo && that.repo.list().await?.is_empty() {
            let created = that.seed(&DemoSamples::default()).await?;
            tracing::info!(count = created.len(), "seeded demo events");
        }
        Ok(that)
    }

    /// Creates a planner on top of the given repository.
    pub fn with_repository(config: Config, repo: Arc<dyn EventRepository>) -> Self {
        Self {
            now: Local::now().naive_local(),
            config,
            repo,
            filter: PlatformFilter::All,
        }
    }

    /// The current time in the planner.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Overrides the current time, mostly useful for tests.
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// Today's date in local time.
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The active platform filter.
    pub fn filter(&self) -> PlatformFilter {
        self.filter
    }

    /// Changes the platform filter, the stored events are not touched.
    pub fn set_filter(&mut self, filter: PlatformFilter) {
        self.filter = filter;
    }

    /// An empty draft for the given day.
    pub fn default_draft(&self, day: Option<NaiveDate>) -> EventDraft {
        EventDraft::new(&self.config, day)
    }

    /// Every day of the month containing `anchor`, ascending.
    pub fn list_events_for_month(&self, anchor: NaiveDate) -> Vec<NaiveDate> {
        datetime::list_events_for_month(anchor)
    }

    /// The Sunday-first grid of the month containing `anchor`.
    pub fn month_grid(&self, anchor: NaiveDate, selected: Option<NaiveDate>) -> MonthGrid {
        MonthGrid::new(anchor, self.today(), selected)
    }

    /// All events in insertion order, ignoring the filter.
    pub async fn list_events(&self) -> Result<Vec<CalendarEvent>, EventError> {
        self.repo.list().await
    }

    /// The events on `day` passing the active filter, in the configured order.
    pub async fn day_events(&self, day: NaiveDate) -> Result<Vec<CalendarEvent>, EventError> {
        let events = self.repo.list().await?;
        Ok(events_on_day(&events, day, self.filter, self.config.day_order)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Get an event by its id.
    pub async fn get_event(&self, id: &str) -> Result<Option<CalendarEvent>, EventError> {
        self.repo.get(id).await
    }

    /// Resolves a full id or a unique id prefix, as printed in the short table column.
    pub async fn find_event(&self, id_or_prefix: &str) -> Result<CalendarEvent, EventError> {
        if let Some(event) = self.repo.get(id_or_prefix).await? {
            return Ok(event);
        }

        let mut matches: Vec<_> = self
            .repo
            .list()
            .await?
            .into_iter()
            .filter(|e| !id_or_prefix.is_empty() && e.id().starts_with(id_or_prefix))
            .collect();
        match matches.len() {
            0 => Err(EventError::NotFound(id_or_prefix.to_string())),
            1 => Ok(matches.remove(0)),
            n => Err(EventError::AmbiguousId(id_or_prefix.to_string(), n)),
        }
    }

    /// Validates the draft and adds a new event. Nothing is stored when validation fails.
    pub async fn create_event(&self, draft: EventDraft) -> Result<CalendarEvent, EventError> {
        let id = self.generate_id().await?;
        let event = CalendarEvent::from_draft(id, draft)?;
        self.repo.create(event.clone()).await?;
        tracing::debug!(id = event.id(), title = event.title(), "created event");
        Ok(event)
    }

    /// Replaces every field of the event with the draft, keeping its id.
    pub async fn update_event(
        &self,
        id: &str,
        draft: EventDraft,
    ) -> Result<CalendarEvent, EventError> {
        let event = CalendarEvent::from_draft(id.to_string(), draft)?;
        if self.repo.get(id).await?.is_none() {
            return Err(EventError::NotFound(id.to_string()));
        }

        self.repo.update(event.clone()).await?;
        tracing::debug!(id, title = event.title(), "updated event");
        Ok(event)
    }

    /// Applies a partial change on top of the stored event.
    pub async fn patch_event(
        &self,
        id: &str,
        patch: EventPatch,
    ) -> Result<CalendarEvent, EventError> {
        let event = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;

        let mut draft = EventDraft::from_event(&event);
        patch.apply_to(&mut draft);
        self.update_event(id, draft).await
    }

    /// Removes the event for good, returns whether it existed.
    pub async fn delete_event(&self, id: &str) -> Result<bool, EventError> {
        let deleted = self.repo.delete(id).await?;
        tracing::debug!(id, deleted, "deleted event");
        Ok(deleted)
    }

    /// Adds a copy of the event one day later, titled "Copy of ...".
    pub async fn duplicate_event(
        &self,
        event: &CalendarEvent,
    ) -> Result<CalendarEvent, EventError> {
        let id = self.generate_id().await?;
        let copy = event.duplicate(id);
        self.repo.create(copy.clone()).await?;
        tracing::debug!(from = event.id(), id = copy.id(), "duplicated event");
        Ok(copy)
    }

    /// Creates every draft from the source, stopping at the first failure.
    pub async fn seed(&self, source: &dyn SampleSource) -> Result<Vec<CalendarEvent>, EventError> {
        let mut created = Vec::new();
        for draft in source.samples(self.today()) {
            created.push(self.create_event(draft).await?);
        }
        Ok(created)
    }

    async fn generate_id(&self) -> Result<String, EventError> {
        for _ in 0..16 {
            let id = Uuid::new_v4().to_string();
            if self.repo.get(&id).await?.is_none() {
                return Ok(id);
            }
        }

        Err(EventError::IdExhausted)
    }
}
