// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directories used for testing, removed when dropped.
#[derive(Debug)]
pub struct TempDirs {
    _base: TempDir,

    /// State directory for the events file.
    pub state_dir: PathBuf,
}

impl TempDirs {
    /// The events file inside the state directory.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.state_dir.join("events.json")
    }
}

/// Sets up temporary directories for testing.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;
    let state_dir = base.path().join("state");
    tokio::fs::create_dir_all(&state_dir).await?;
    Ok(TempDirs {
        _base: base,
        state_dir,
    })
}
