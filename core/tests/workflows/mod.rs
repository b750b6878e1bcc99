// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the monthcal-core crate.
//!
//! These tests drive the calendar view the way the terminal front end does:
//! clicking days and events, editing drafts, saving and navigating months.

mod event_lifecycle;
mod grid_properties;
mod month_navigation;
mod store_properties;
