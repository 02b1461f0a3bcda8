// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use postcal_core::{EventError, EventStatus, Platform};

use crate::common::{assert_bucket_titles, date, memory_planner, test_event_draft};

#[tokio::test]
async fn launch_post_lifecycle() {
    let planner = memory_planner();

    // Create
    let mut draft = test_event_draft("Launch Post", "2024-06-15", "09:00", Platform::Instagram);
    draft.status = EventStatus::Scheduled;
    let event = planner.create_event(draft).await.unwrap();

    let bucket = planner.day_events(date(2024, 6, 15)).await.unwrap();
    assert_bucket_titles(&bucket, &["Launch Post"]);
    assert_eq!(bucket[0].time(), "09:00");
    assert_eq!(bucket[0].content_type(), "post");

    // Duplicate
    let copy = planner.duplicate_event(&event).await.unwrap();
    assert_eq!(copy.title(), "Copy of Launch Post");
    assert_eq!(copy.day(), date(2024, 6, 16));
    assert_eq!(copy.time(), "09:00");
    assert_ne!(copy.id(), event.id());

    let bucket = planner.day_events(date(2024, 6, 16)).await.unwrap();
    assert_bucket_titles(&bucket, &["Copy of Launch Post"]);

    // Delete the copy
    assert!(planner.delete_event(copy.id()).await.unwrap());
    assert!(planner.day_events(date(2024, 6, 16)).await.unwrap().is_empty());
    assert_bucket_titles(
        &planner.day_events(date(2024, 6, 15)).await.unwrap(),
        &["Launch Post"],
    );
}

#[tokio::test]
async fn empty_title_leaves_store_unchanged() {
    let planner = memory_planner();
    planner
        .create_event(test_event_draft("Existing", "2024-06-15", "09:00", Platform::Twitter))
        .await
        .unwrap();
    let before = planner.list_events().await.unwrap();

    let err = planner
        .create_event(test_event_draft("", "2024-06-15", "10:00", Platform::Twitter))
        .await
        .unwrap_err();
    assert!(matches!(err, EventError::MissingTitle));
    assert!(err.is_validation());
    assert_eq!(planner.list_events().await.unwrap(), before);
}

#[tokio::test]
async fn invalid_time_is_rejected_on_update() {
    let planner = memory_planner();
    let event = planner
        .create_event(test_event_draft("Post", "2024-06-15", "09:00", Platform::Facebook))
        .await
        .unwrap();

    let err = planner
        .update_event(
            event.id(),
            test_event_draft("Post", "2024-06-15", "99:99", Platform::Facebook),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EventError::InvalidTime(_)));
    assert_eq!(planner.get_event(event.id()).await.unwrap(), Some(event));
}

#[tokio::test]
async fn delete_unknown_id_removes_nothing() {
    let planner = memory_planner();
    planner
        .create_event(test_event_draft("Keep", "2024-06-15", "09:00", Platform::Tiktok))
        .await
        .unwrap();

    assert!(!planner.delete_event("no-such-id").await.unwrap());
    assert_eq!(planner.list_events().await.unwrap().len(), 1);
}
