// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::dialog::{Dialog, Draft};
use crate::placement::{Placement, place_on};
use crate::store::{Snapshot, Subscription};
use crate::{
    CalendarGrid, Config, DialogError, DisplayMonth, Event, EventId, EventStore, StoreError,
};

/// The month view: the displayed grid, the selected day, the latest event
/// snapshot and the create/edit dialog.
///
/// The view subscribes to the store on construction and drops the
/// subscription when dropped.
#[derive(Debug)]
pub struct CalendarView {
    config: Config,
    store: Rc<RefCell<EventStore>>,
    events: Rc<RefCell<Snapshot>>,
    subscription: Subscription,
    now: NaiveDateTime,
    month: DisplayMonth,
    grid: CalendarGrid,
    selected: NaiveDate,
    dialog: Dialog,
}

impl CalendarView {
    /// Creates a view showing the month of `now`.
    pub fn new(store: Rc<RefCell<EventStore>>, config: Config, now: NaiveDateTime) -> Self {
        let events = Rc::new(RefCell::new(Snapshot::from(Vec::new())));
        let sink = events.clone();
        let subscription = store
            .borrow_mut()
            .subscribe(move |snapshot| *sink.borrow_mut() = snapshot.clone());

        let today = now.date();
        let month = DisplayMonth::containing(today);
        let grid = CalendarGrid::build(month, config.week_start, today);
        Self {
            config,
            store,
            events,
            subscription,
            now,
            month,
            grid,
            selected: today,
            dialog: Dialog::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn month(&self) -> DisplayMonth {
        self.month
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// The draft of the open dialog, for the per-field update handlers.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.dialog.draft_mut()
    }

    /// The latest snapshot published by the store.
    pub fn events(&self) -> Snapshot {
        self.events.borrow().clone()
    }

    /// The events covering `date`, in store order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        let events = self.events();
        crate::placement::events_on(&events, date)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Runs `f` with the placements of `date`.
    pub fn with_placements<R>(&self, date: NaiveDate, f: impl FnOnce(&[Placement<'_>]) -> R) -> R {
        let events = self.events();
        f(&place_on(&events, date))
    }

    /// Updates the clock. The grid is rebuilt when the day changes.
    pub fn refresh_now(&mut self, now: NaiveDateTime) {
        let day_changed = now.date() != self.now.date();
        self.now = now;
        if day_changed {
            self.rebuild_grid();
        }
    }

    /// Displays `month`, keeping the selected day of month where possible.
    pub fn show_month(&mut self, month: DisplayMonth) {
        tracing::debug!(%month, "showing month");
        self.month = month;
        self.selected = same_day_in(month, self.selected.day());
        self.rebuild_grid();
    }

    pub fn next_month(&mut self) {
        self.show_month(self.month.next());
    }

    pub fn previous_month(&mut self) {
        self.show_month(self.month.previous());
    }

    /// Displays the current month and selects today.
    pub fn go_to_today(&mut self) {
        let today = self.today();
        self.show_month(DisplayMonth::containing(today));
        self.selected = today;
    }

    /// Selects `date`, switching months if it is outside the displayed one.
    pub fn select(&mut self, date: NaiveDate) {
        if !self.month.contains(date) {
            self.month = DisplayMonth::containing(date);
            self.rebuild_grid();
        }
        self.selected = date;
    }

    /// Moves the selection by a number of days, negative for backwards.
    pub fn move_selection(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.selected.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.selected.checked_sub_days(Days::new(days.unsigned_abs()))
        };

        if let Some(date) = moved {
            self.select(date);
        }
    }

    /// Opens the dialog for a new event on `date`.
    pub fn click_date(&mut self, date: NaiveDate) {
        self.selected = date;
        let draft = Draft::new(
            date,
            self.now.time(),
            self.config.default_duration.duration(),
            &self.config.default_color,
        );
        self.dialog.open_create(date, draft);
    }

    /// Opens the dialog on the event with the given id.
    pub fn click_event(&mut self, id: &EventId) -> Result<(), StoreError> {
        let events = self.events();
        let event = events
            .iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        self.dialog.open_edit(event);
        Ok(())
    }

    pub fn save(&mut self) -> Result<EventId, DialogError> {
        let mut store = self.store.borrow_mut();
        self.dialog.save(&mut store)
    }

    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    pub fn delete(&mut self) -> Result<Event, DialogError> {
        let mut store = self.store.borrow_mut();
        self.dialog.delete(&mut store)
    }

    fn rebuild_grid(&mut self) {
        self.grid = CalendarGrid::build(self.month, self.config.week_start, self.today());
    }
}

impl Drop for CalendarView {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

/// The given day of month in `month`, clamped to its last day.
fn same_day_in(month: DisplayMonth, day: u32) -> NaiveDate {
    let last = month.last_day();
    month.first_day().with_day(day.min(last.day())).unwrap_or(last)
}
