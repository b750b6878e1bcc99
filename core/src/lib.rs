// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of a month-view calendar: the event store, the month grid, the
//! per-day placement of events and the create/edit dialog.

mod calendar;
pub mod color;
mod config;
pub mod datetime;
mod dialog;
mod error;
mod event;
pub mod grid;
pub mod locale;
pub mod placement;
mod store;

pub use crate::calendar::CalendarView;
pub use crate::config::{APP_NAME, Config, ConfigDuration};
pub use crate::datetime::{DisplayMonth, ParseMonthError};
pub use crate::dialog::{Dialog, DialogState, Draft};
pub use crate::error::{DialogError, DraftField, StoreError};
pub use crate::event::{DEFAULT_COLOR, Event, EventDraft, EventId};
pub use crate::grid::{CalendarGrid, GridCell};
pub use crate::placement::{Placement, SegmentRole};
pub use crate::store::{EventStore, Snapshot, Subscription};
