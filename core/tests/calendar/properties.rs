// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use chrono::{Datelike, Duration};
use postcal_core::{GridCell, Platform, PlatformFilter, list_events_for_month};

use crate::common::{date, memory_planner, test_event_draft};

#[test]
fn month_days_match_month_length() {
    for year in [2023, 2024, 2100] {
        for month in 1..=12 {
            let days = list_events_for_month(date(year, month, 1));
            let expected = match month {
                2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
                2 => 28,
                4 | 6 | 9 | 11 => 30,
                _ => 31,
            };
            assert_eq!(days.len(), expected, "{year}-{month}");
            assert!(days.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
            assert!(days.iter().all(|d| d.month() == month && d.year() == year));
        }
    }
}

#[tokio::test]
async fn grid_rows_cover_exactly_the_month() {
    let planner = memory_planner();
    for year in [2015, 2024] {
        for month in 1..=12 {
            let anchor = date(year, month, 10);
            let grid = planner.month_grid(anchor, None);
            let weeks = grid.weeks();
            assert!((4..=6).contains(&weeks.len()), "{year}-{month}");

            let cells: Vec<_> = weeks.iter().flatten().collect();
            let days: Vec<_> = grid.days().map(|d| d.date).collect();
            assert_eq!(days, list_events_for_month(anchor));

            let first = cells.iter().position(|c| matches!(c, GridCell::Day(_))).unwrap();
            assert_eq!(first, days[0].weekday().num_days_from_sunday() as usize);
            assert!(cells[first..first + days.len()].iter().all(|c| matches!(c, GridCell::Day(_))));
            assert!(cells[first + days.len()..].iter().all(|c| matches!(c, GridCell::Blank)));
            assert!(cells.len() - first - days.len() < 7);
        }
    }
}

#[tokio::test]
async fn created_ids_are_unique() {
    let planner = memory_planner();
    for i in 0..50 {
        let day = format!("2024-06-{:02}", i % 30 + 1);
        planner
            .create_event(test_event_draft(&format!("Post {i}"), &day, "09:00", Platform::Instagram))
            .await
            .unwrap();
    }

    let events = planner.list_events().await.unwrap();
    let ids: HashSet<_> = events.iter().map(|e| e.id()).collect();
    assert_eq!(ids.len(), events.len());
}

#[tokio::test]
async fn day_bucket_never_leaks_other_days() {
    let planner = memory_planner();
    for (i, platform) in Platform::ALL.into_iter().enumerate() {
        let day = format!("2024-06-{:02}", 14 + i % 3);
        planner
            .create_event(test_event_draft("Post", &day, "23:59", platform))
            .await
            .unwrap();
    }

    for day in list_events_for_month(date(2024, 6, 1)) {
        let bucket = planner.day_events(day).await.unwrap();
        assert!(bucket.iter().all(|e| e.day() == day));
        if !(14..=16).contains(&day.day()) {
            assert!(bucket.is_empty());
        }
    }
}

#[tokio::test]
async fn specific_platform_is_subset_of_all() {
    let mut planner = memory_planner();
    for (i, platform) in Platform::ALL.into_iter().cycle().take(12).enumerate() {
        let time = format!("{:02}:00", i + 8);
        planner
            .create_event(test_event_draft("Post", "2024-06-15", &time, platform))
            .await
            .unwrap();
    }

    let day = date(2024, 6, 15);
    let all = planner.day_events(day).await.unwrap();
    assert_eq!(all.len(), 12);

    for platform in Platform::ALL {
        planner.set_filter(PlatformFilter::Only(platform));
        let only = planner.day_events(day).await.unwrap();
        assert_eq!(only.len(), 2);
        assert!(only.iter().all(|e| e.platform() == platform && all.contains(e)));
    }
}

#[tokio::test]
async fn duplicate_preserves_everything_else() {
    let planner = memory_planner();
    let mut draft = test_event_draft("Recap", "2024-02-28", "12:00", Platform::Linkedin);
    draft.description = Some("weekly recap".to_string());
    draft.content_type = "article".to_string();
    let event = planner.create_event(draft).await.unwrap();

    let copy = planner.duplicate_event(&event).await.unwrap();
    let second = planner.duplicate_event(&copy).await.unwrap();

    assert_eq!(copy.day(), date(2024, 2, 29));
    assert_eq!(second.day(), date(2024, 3, 1));
    assert_eq!(second.title(), "Copy of Copy of Recap");
    for e in [&copy, &second] {
        assert_eq!(e.description(), Some("weekly recap"));
        assert_eq!(e.content_type(), "article");
        assert_eq!(e.platform(), Platform::Linkedin);
        assert_eq!(e.status(), event.status());
    }
}
