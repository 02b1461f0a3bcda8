// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows whose behavior depends on configuration values.

use std::sync::Arc;

use postcal_core::{
    Config, DayOrder, EventStatus, MemoryRepository, Planner, Platform,
};

use crate::common::{
    assert_bucket_titles, date, setup_temp_dirs, test_config, test_event_draft,
};

#[tokio::test]
async fn default_draft_uses_configured_values() {
    let config = Config {
        default_time: "18:30".to_string(),
        default_platform: Platform::Youtube,
        default_status: EventStatus::Draft,
        ..test_config(None)
    };
    let planner = Planner::with_repository(config, Arc::new(MemoryRepository::new()));

    let draft = planner.default_draft(Some(date(2024, 6, 15)));
    assert_eq!(draft.date.as_deref(), Some("2024-06-15"));
    assert_eq!(draft.time, "18:30");
    assert_eq!(draft.platform, Platform::Youtube);
    assert_eq!(draft.status, EventStatus::Draft);
    assert!(draft.title.is_empty());
}

#[tokio::test]
async fn time_order_sorts_day_bucket() {
    let config = Config {
        day_order: DayOrder::Time,
        ..test_config(None)
    };
    let planner = Planner::with_repository(config, Arc::new(MemoryRepository::new()));
    for (title, time) in [("Late", "21:00"), ("Early", "07:30"), ("Noon", "12:00")] {
        planner
            .create_event(test_event_draft(title, "2024-06-15", time, Platform::Instagram))
            .await
            .unwrap();
    }

    let bucket = planner.day_events(date(2024, 6, 15)).await.unwrap();
    assert_bucket_titles(&bucket, &["Early", "Noon", "Late"]);
}

#[tokio::test]
async fn insertion_order_is_the_default() {
    let planner = Planner::with_repository(test_config(None), Arc::new(MemoryRepository::new()));
    for (title, time) in [("Late", "21:00"), ("Early", "07:30")] {
        planner
            .create_event(test_event_draft(title, "2024-06-15", time, Platform::Instagram))
            .await
            .unwrap();
    }

    let bucket = planner.day_events(date(2024, 6, 15)).await.unwrap();
    assert_bucket_titles(&bucket, &["Late", "Early"]);
}

#[tokio::test]
async fn seed_demo_only_fills_an_empty_file() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.data_path();
    let config = Config {
        seed_demo: true,
        ..test_config(Some(&path))
    };

    let planner = Planner::new(config.clone()).await.unwrap();
    let seeded = planner.list_events().await.unwrap();
    assert!(!seeded.is_empty());

    let reopened = Planner::new(config).await.unwrap();
    assert_eq!(reopened.list_events().await.unwrap(), seeded);
}

#[tokio::test]
async fn invalid_default_time_fails_startup() {
    let config = Config {
        default_time: "quarter past".to_string(),
        ..test_config(None)
    };
    assert!(Planner::new(config).await.is_err());
}
