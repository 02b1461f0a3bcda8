// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the postcal-core crate.
//!
//! These tests validate multi-step workflows that integrate the planner, the dialog
//! controller and the persisted repository.

mod config_driven;
mod dialog_flow;
mod file_sync;
