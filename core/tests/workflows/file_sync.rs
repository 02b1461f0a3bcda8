// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows persisting through the JSON events file.

use postcal_core::{Planner, Platform};

use crate::common::{assert_file_exists, date, setup_temp_dirs, test_config, test_event_draft};

#[tokio::test]
async fn events_survive_restart() {
    // Arrange
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.data_path();
    let planner = Planner::new(test_config(Some(&path))).await.unwrap();

    // Act
    let event = planner
        .create_event(test_event_draft("Launch Post", "2024-06-15", "09:00", Platform::Instagram))
        .await
        .unwrap();
    let copy = planner.duplicate_event(&event).await.unwrap();

    // Assert - the file holds both events
    assert_file_exists(&path);
    let reopened = Planner::new(test_config(Some(&path))).await.unwrap();
    let events = reopened.list_events().await.unwrap();
    assert_eq!(events, vec![event.clone(), copy.clone()]);

    // Assert - deletions are persisted too
    assert!(reopened.delete_event(copy.id()).await.unwrap());
    let again = Planner::new(test_config(Some(&path))).await.unwrap();
    assert!(again.day_events(date(2024, 6, 16)).await.unwrap().is_empty());
    assert_eq!(again.list_events().await.unwrap(), vec![event]);
}

#[tokio::test]
async fn file_records_time_next_to_date() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.data_path();
    let planner = Planner::new(test_config(Some(&path))).await.unwrap();
    planner
        .create_event(test_event_draft("Evening reel", "2024-06-15", "19:45", Platform::Tiktok))
        .await
        .unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json[0]["date"], "2024-06-15T19:45:00");
    assert_eq!(json[0]["time"], "19:45");
    assert_eq!(json[0]["platform"], "tiktok");
}

#[tokio::test]
async fn corrupt_file_fails_to_open() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.data_path();
    tokio::fs::write(&path, "[{]").await.unwrap();

    assert!(Planner::new(test_config(Some(&path))).await.is_err());
}
