// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

/// Errors raised by the event store and its repositories.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// The title is empty or only whitespace.
    #[error("Missing information: a title is required")]
    MissingTitle,

    /// No date was selected.
    #[error("Missing information: a date is required")]
    MissingDate,

    /// The date string is not a valid `YYYY-MM-DD` date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The time string is not a valid `HH:MM` time.
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    /// No event has the given id.
    #[error("Event not found: {0}")]
    NotFound(String),

    /// The id prefix matches more than one event.
    #[error("Ambiguous id '{0}', matches {1} events")]
    AmbiguousId(String, usize),

    /// An event with the given id already exists.
    #[error("Event already exists: {0}")]
    Conflict(String),

    /// The backing storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Could not find a free id.
    #[error("Failed to generate a unique id after multiple attempts")]
    IdExhausted,
}

impl EventError {
    /// Whether this is a client-side validation failure, which never mutates the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EventError::MissingTitle
                | EventError::MissingDate
                | EventError::InvalidDate(_)
                | EventError::InvalidTime(_)
        )
    }
}

impl From<io::Error> for EventError {
    fn from(e: io::Error) -> Self {
        Self::Storage(format!("IO error: {e}"))
    }
}

impl From<serde_json::Error> for EventError {
    fn from(e: serde_json::Error) -> Self {
        Self::Storage(format!("JSON error: {e}"))
    }
}
