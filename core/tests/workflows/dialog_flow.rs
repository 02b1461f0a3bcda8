// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Dialog-driven create, edit and delete, as the calendar page performs them.

use postcal_core::{Dialog, DialogMode, EventError, GridCell, Platform};

use crate::common::{assert_bucket_titles, date, memory_planner};

#[tokio::test]
async fn create_from_selected_day_then_edit_then_delete() {
    let planner = memory_planner();
    let selected = date(2024, 6, 15);
    let mut dialog = Dialog::new();

    // Submitting an untitled form keeps it open
    dialog.open_create(&planner, Some(selected));
    let err = dialog.submit(&planner).await.unwrap_err();
    assert!(matches!(err, EventError::MissingTitle));
    assert!(matches!(dialog.mode(), DialogMode::Creating(_)));

    // Correct and resubmit
    {
        let draft = dialog.draft_mut().unwrap();
        draft.title = "Launch Post".to_string();
        draft.platform = Platform::Instagram;
    }
    let event = dialog.submit(&planner).await.unwrap().unwrap();
    assert!(dialog.is_idle());
    assert_eq!(event.time(), "09:00");

    // Grid highlights the selected day, which now has one event
    let grid = planner.month_grid(selected, Some(selected));
    let cell = grid.days().find(|d| d.date == selected).unwrap();
    assert!(cell.is_selected);
    assert!(
        grid.weeks()
            .iter()
            .flatten()
            .any(|c| matches!(c, GridCell::Day(d) if d.date == selected))
    );
    assert_bucket_titles(&planner.day_events(selected).await.unwrap(), &["Launch Post"]);

    // Edit moves it to another day
    dialog.open_edit(&event);
    dialog.draft_mut().unwrap().date = Some("2024-06-20".to_string());
    dialog.submit(&planner).await.unwrap();
    assert!(planner.day_events(selected).await.unwrap().is_empty());
    assert_bucket_titles(
        &planner.day_events(date(2024, 6, 20)).await.unwrap(),
        &["Launch Post"],
    );

    // Delete through confirmation
    dialog.request_delete(event.id());
    assert!(dialog.confirm_delete(&planner).await.unwrap());
    assert!(planner.list_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn clearing_the_date_blocks_edit() {
    let planner = memory_planner();
    let mut dialog = Dialog::new();
    dialog.open_create(&planner, Some(date(2024, 6, 15)));
    dialog.draft_mut().unwrap().title = "Post".to_string();
    let event = dialog.submit(&planner).await.unwrap().unwrap();

    dialog.open_edit(&event);
    dialog.draft_mut().unwrap().date = None;
    let err = dialog.submit(&planner).await.unwrap_err();
    assert!(matches!(err, EventError::MissingDate));
    assert!(matches!(dialog.mode(), DialogMode::Editing { .. }));
    assert_eq!(planner.get_event(event.id()).await.unwrap(), Some(event));
}
