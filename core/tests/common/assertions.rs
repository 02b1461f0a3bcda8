// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use postcal_core::CalendarEvent;

/// Asserts that a day bucket holds exactly the given titles, in order.
///
/// # Panics
///
/// Panics if the titles differ.
pub fn assert_bucket_titles(bucket: &[CalendarEvent], titles: &[&str]) {
    let actual: Vec<_> = bucket.iter().map(CalendarEvent::title).collect();
    assert_eq!(actual, titles, "Day bucket mismatch");
}

/// Asserts that a file exists at the given path.
///
/// # Panics
///
/// Panics if the file does not exist.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}
