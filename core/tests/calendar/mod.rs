// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the calendar event store.
//!
//! `scenarios` walks through the create, duplicate and delete story end to end,
//! `properties` checks the store-wide guarantees over many inputs.

mod properties;
mod scenarios;
