// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::{CalendarEvent, EventError};

/// Storage for calendar events, the store only talks to this interface.
#[async_trait]
pub trait EventRepository: Debug + Send + Sync {
    /// All events in insertion order.
    async fn list(&self) -> Result<Vec<CalendarEvent>, EventError>;

    /// The event with the given id, if any.
    async fn get(&self, id: &str) -> Result<Option<CalendarEvent>, EventError>;

    /// Appends a new event, failing if the id is taken.
    async fn create(&self, event: CalendarEvent) -> Result<(), EventError>;

    /// Replaces the event with the same id, keeping its position.
    async fn update(&self, event: CalendarEvent) -> Result<(), EventError>;

    /// Removes the event with the given id, returning whether it existed.
    async fn delete(&self, id: &str) -> Result<bool, EventError>;
}

/// Events held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    events: RwLock<Vec<CalendarEvent>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    async fn snapshot(&self) -> Vec<CalendarEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventRepository for MemoryRepository {
    async fn list(&self) -> Result<Vec<CalendarEvent>, EventError> {
        Ok(self.snapshot().await)
    }

    async fn get(&self, id: &str) -> Result<Option<CalendarEvent>, EventError> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id() == id).cloned())
    }

    async fn create(&self, event: CalendarEvent) -> Result<(), EventError> {
        insert(&mut *self.events.write().await, event)
    }

    async fn update(&self, event: CalendarEvent) -> Result<(), EventError> {
        replace(&mut *self.events.write().await, event)
    }

    async fn delete(&self, id: &str) -> Result<bool, EventError> {
        Ok(remove(&mut *self.events.write().await, id))
    }
}

fn insert(events: &mut Vec<CalendarEvent>, event: CalendarEvent) -> Result<(), EventError> {
    if events.iter().any(|e| e.id() == event.id()) {
        return Err(EventError::Conflict(event.id().to_string()));
    }
    events.push(event);
    Ok(())
}

fn replace(events: &mut [CalendarEvent], event: CalendarEvent) -> Result<(), EventError> {
    match events.iter_mut().find(|e| e.id() == event.id()) {
        Some(slot) => {
            *slot = event;
            Ok(())
        }
        None => Err(EventError::NotFound(event.id().to_string())),
    }
}

fn remove(events: &mut Vec<CalendarEvent>, id: &str) -> bool {
    match events.iter().position(|e| e.id() == id) {
        Some(index) => {
            events.remove(index);
            true
        }
        None => false,
    }
}

/// Rejects a collection where two events share an id.
fn check_unique_ids(events: &[CalendarEvent]) -> Result<(), EventError> {
    let mut seen = HashSet::with_capacity(events.len());
    match events.iter().find(|e| !seen.insert(e.id())) {
        Some(dup) => Err(EventError::Conflict(dup.id().to_string())),
        None => Ok(()),
    }
}

/// Events persisted to a single JSON file, rewritten after every mutation.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    inner: MemoryRepository,
}

impl JsonFileRepository {
    /// Opens the file, a missing file is treated as an empty calendar.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, EventError> {
        let path = path.into();
        let events = match fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => {
                let events: Vec<CalendarEvent> = serde_json::from_str(&content)?;
                check_unique_ids(&events)?;
                tracing::debug!(path = %path.display(), count = events.len(), "loaded events");
                events
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no events file yet");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner: MemoryRepository::with_events(events),
        })
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies the change to a copy of the events and writes it out. Memory is only
    /// updated once the file holds the new state, so a failed write changes nothing.
    async fn commit<T: Send>(
        &self,
        change: impl FnOnce(&mut Vec<CalendarEvent>) -> Result<T, EventError> + Send,
    ) -> Result<T, EventError> {
        let mut events = self.inner.events.write().await;
        let mut next = events.clone();
        let out = change(&mut next)?;

        self.write(&next).await?;
        *events = next;
        Ok(out)
    }

    async fn write(&self, events: &[CalendarEvent]) -> Result<(), EventError> {
        let content = serde_json::to_string_pretty(events)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, content).await?;
        tracing::debug!(path = %self.path.display(), count = events.len(), "saved events");
        Ok(())
    }
}

#[async_trait]
impl EventRepository for JsonFileRepository {
    async fn list(&self) -> Result<Vec<CalendarEvent>, EventError> {
        self.inner.list().await
    }

    async fn get(&self, id: &str) -> Result<Option<CalendarEvent>, EventError> {
        self.inner.get(id).await
    }

    async fn create(&self, event: CalendarEvent) -> Result<(), EventError> {
        self.commit(|events| insert(events, event)).await
    }

    async fn update(&self, event: CalendarEvent) -> Result<(), EventError> {
        self.commit(|events| replace(events, event)).await
    }

    async fn delete(&self, id: &str) -> Result<bool, EventError> {
        if self.inner.get(id).await?.is_none() {
            return Ok(false);
        }
        self.commit(|events| Ok(remove(events, id))).await
    }
}
