// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::{CalendarEvent, EventDraft, EventError, Planner};

/// The dialog currently open over the calendar, at most one at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DialogMode {
    /// No dialog is open.
    #[default]
    Idle,

    /// The create form is open.
    Creating(EventDraft),

    /// The edit form is open for an existing event.
    Editing { id: String, draft: EventDraft },

    /// Waiting for the user to confirm the deletion.
    ConfirmingDelete { id: String },
}

/// Drives create, edit and delete through their dialogs.
#[derive(Debug, Default, Clone)]
pub struct Dialog {
    mode: DialogMode,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode.
    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    /// Whether no dialog is open.
    pub fn is_idle(&self) -> bool {
        self.mode == DialogMode::Idle
    }

    /// Opens the create form for the selected day, closing any other dialog.
    pub fn open_create(&mut self, planner: &Planner, day: Option<NaiveDate>) {
        self.replace(DialogMode::Creating(planner.default_draft(day)));
    }

    /// Opens the edit form prefilled from the event, closing any other dialog.
    pub fn open_edit(&mut self, event: &CalendarEvent) {
        self.replace(DialogMode::Editing {
            id: event.id().to_string(),
            draft: EventDraft::from_event(event),
        });
    }

    /// Selects an event for deletion, the deletion happens on [`Dialog::confirm_delete`].
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.replace(DialogMode::ConfirmingDelete { id: id.into() });
    }

    /// The draft of the open form, if any.
    pub fn draft(&self) -> Option<&EventDraft> {
        match &self.mode {
            DialogMode::Creating(draft) | DialogMode::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the draft of the open form, if any.
    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match &mut self.mode {
            DialogMode::Creating(draft) | DialogMode::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Closes the dialog without touching the calendar.
    pub fn cancel(&mut self) {
        self.replace(DialogMode::Idle);
    }

    /// Submits the open form.
    ///
    /// On failure the form stays open with the draft untouched so the user can correct it.
    /// Returns `Ok(None)` when no form is open.
    pub async fn submit(&mut self, planner: &Planner) -> Result<Option<CalendarEvent>, EventError> {
        let event = match &self.mode {
            DialogMode::Creating(draft) => planner.create_event(draft.clone()).await?,
            DialogMode::Editing { id, draft } => planner.update_event(id, draft.clone()).await?,
            _ => return Ok(None),
        };

        self.mode = DialogMode::Idle;
        Ok(Some(event))
    }

    /// Confirms a pending deletion and closes the dialog.
    ///
    /// Returns whether an event was removed, `false` also when nothing was pending.
    pub async fn confirm_delete(&mut self, planner: &Planner) -> Result<bool, EventError> {
        let id = match &self.mode {
            DialogMode::ConfirmingDelete { id } => id.clone(),
            _ => return Ok(false),
        };

        let deleted = planner.delete_event(&id).await?;
        self.mode = DialogMode::Idle;
        Ok(deleted)
    }

    fn replace(&mut self, mode: DialogMode) {
        if self.mode != DialogMode::Idle && mode != DialogMode::Idle {
            tracing::debug!(from = ?self.mode, "closing open dialog");
        }
        self.mode = mode;
    }
}
