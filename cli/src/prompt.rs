// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use cliclack::{confirm, input, intro, note, outro, outro_cancel, select};
use postcal_core::{
    CONTENT_TYPES, CalendarEvent, Dialog, DialogMode, EventDraft, EventStatus, Planner, Platform,
};

const DATE_NOTE: &str = "\
• Date: YYYY-MM-DD, e.g. 2025-01-15
• Time: HH:MM, 24-hour clock";

/// Fills the open form interactively and submits it.
///
/// Validation failures are reported and the form is shown again with the entered values,
/// interrupting the prompt cancels the dialog. Returns the saved event, `None` if cancelled.
pub async fn submit_form(
    planner: &Planner,
    dialog: &mut Dialog,
) -> Result<Option<CalendarEvent>, Box<dyn Error>> {
    let heading = match dialog.mode() {
        DialogMode::Creating(_) => "New event",
        DialogMode::Editing { .. } => "Edit event",
        _ => return Ok(None),
    };

    intro(heading)?;
    note("Supported formats:", DATE_NOTE)?;
    loop {
        let Some(draft) = dialog.draft_mut() else {
            return Ok(None);
        };

        match prompt_draft(draft) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                tracing::info!("user cancelled the event form");
                dialog.cancel();
                outro_cancel("Cancelled")?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }

        match dialog.submit(planner).await {
            Ok(event) => {
                outro("Event saved")?;
                return Ok(event);
            }
            Err(e) if e.is_validation() => cliclack::log::error(e)?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Asks before deleting the event selected in the dialog.
///
/// Returns whether the event was deleted.
pub async fn confirm_and_delete(
    planner: &Planner,
    dialog: &mut Dialog,
    event: &CalendarEvent,
) -> Result<bool, Box<dyn Error>> {
    dialog.request_delete(event.id());

    let prompt = format!("Delete \"{}\"? This cannot be undone.", event.title());
    let confirmed = match confirm(prompt).initial_value(false).interact() {
        Ok(confirmed) => confirmed,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => false,
        Err(e) => return Err(e.into()),
    };

    if !confirmed {
        tracing::info!(id = event.id(), "user kept the event");
        dialog.cancel();
        return Ok(false);
    }
    Ok(dialog.confirm_delete(planner).await?)
}

fn prompt_draft(draft: &mut EventDraft) -> io::Result<()> {
    draft.title = input("Title")
        .placeholder("e.g. Product launch teaser")
        .default_input(&draft.title)
        .required(false)
        .interact()?;

    let description: String = input("Description")
        .placeholder("optional")
        .default_input(draft.description.as_deref().unwrap_or_default())
        .required(false)
        .interact()?;
    draft.description = (!description.trim().is_empty()).then_some(description);

    draft.date = Some(
        input("Date")
            .placeholder("YYYY-MM-DD")
            .default_input(draft.date.as_deref().unwrap_or_default())
            .required(false)
            .interact()?,
    );

    draft.time = input("Time")
        .placeholder("HH:MM")
        .default_input(&draft.time)
        .required(false)
        .interact()?;

    let mut platforms = select("Platform").initial_value(draft.platform);
    for platform in Platform::ALL {
        platforms = platforms.item(platform, platform.label(), "");
    }
    draft.platform = platforms.interact()?;

    draft.content_type = input("Type")
        .placeholder(&CONTENT_TYPES.join(", "))
        .default_input(&draft.content_type)
        .interact()?;

    let mut statuses = select("Status").initial_value(draft.status);
    for status in [
        EventStatus::Scheduled,
        EventStatus::Published,
        EventStatus::Draft,
    ] {
        statuses = statuses.item(status, status, "");
    }
    draft.status = statuses.interact()?;

    Ok(())
}
