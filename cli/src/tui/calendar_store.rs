// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use monthcal_core::{CalendarView, Event};

use crate::tui::dispatcher::{Action, Dispatcher};

/// State of the month view screen.
///
/// The date inputs keep the raw text being typed; the draft only holds what
/// parses.
#[derive(Debug)]
pub struct CalendarStore {
    pub view: CalendarView,
    pub start_input: String,
    pub end_input: String,

    /// Index of the focused event among those of the selected day.
    pub focused: Option<usize>,

    /// Message of the last failed action, cleared by the next success.
    pub status: Option<String>,
}

impl CalendarStore {
    pub fn new(view: CalendarView) -> Self {
        Self {
            view,
            start_input: String::new(),
            end_input: String::new(),
            focused: None,
            status: None,
        }
    }

    pub fn focused_event(&self) -> Option<Event> {
        let index = self.focused?;
        self.view.events_on(self.view.selected()).into_iter().nth(index)
    }

    pub fn title(&self) -> String {
        self.draft_field(|d| d.title.clone())
    }

    /// The draft color, or the configured default when the event has none.
    pub fn color(&self) -> String {
        let fallback = &self.view.config().default_color;
        self.draft_field(|d| d.color.clone().unwrap_or_else(|| fallback.clone()))
    }

    pub fn description(&self) -> String {
        self.draft_field(|d| d.description.clone().unwrap_or_default())
    }

    fn draft_field(&self, f: impl FnOnce(&monthcal_core::Draft) -> String) -> String {
        self.view.dialog().draft().map(f).unwrap_or_default()
    }

    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::MoveSelection(days) => {
                self.view.move_selection(*days);
                self.focused = None;
            }
            Action::NextMonth => {
                self.view.next_month();
                self.focused = None;
            }
            Action::PreviousMonth => {
                self.view.previous_month();
                self.focused = None;
            }
            Action::GoToToday => {
                self.view.go_to_today();
                self.focused = None;
            }
            Action::CycleEvent => {
                let count = self.view.events_on(self.view.selected()).len();
                self.focused = match (count, self.focused) {
                    (0, _) => None,
                    (n, Some(i)) => Some((i + 1) % n),
                    (_, None) => Some(0),
                };
            }
            Action::OpenCreate => {
                self.view.click_date(self.view.selected());
                self.sync_inputs();
            }
            Action::EditFocused => match self.focused_event() {
                Some(event) => match self.view.click_event(&event.id) {
                    Ok(()) => self.sync_inputs(),
                    Err(e) => self.status = Some(e.to_string()),
                },
                None => tracing::debug!("no focused event to edit"),
            },
            Action::UpdateTitle(v) => {
                if let Some(d) = self.view.draft_mut() {
                    d.set_title(v.clone());
                }
            }
            Action::UpdateStart(v) => {
                self.start_input = v.clone();
                if let Some(d) = self.view.draft_mut() {
                    d.set_start_input(v);
                }
            }
            Action::UpdateEnd(v) => {
                self.end_input = v.clone();
                if let Some(d) = self.view.draft_mut() {
                    d.set_end_input(v);
                }
            }
            Action::UpdateColor(v) => {
                if let Some(d) = self.view.draft_mut() {
                    d.set_color(v.clone());
                }
            }
            Action::UpdateDescription(v) => {
                if let Some(d) = self.view.draft_mut() {
                    d.set_description(v.clone());
                }
            }
            Action::Save => match self.view.save() {
                Ok(id) => {
                    self.status = None;
                    self.focused = self
                        .view
                        .events_on(self.view.selected())
                        .iter()
                        .position(|e| e.id == id);
                }
                Err(e) => self.status = Some(e.to_string()),
            },
            Action::Cancel => {
                self.view.cancel();
                self.status = None;
            }
            Action::Delete => {
                self.focused = None;
                match self.view.delete() {
                    Ok(_) => self.status = None,
                    Err(e) => self.status = Some(e.to_string()),
                }
            }
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().apply(action);
        }));
        dispatcher.register(callback);
    }

    fn sync_inputs(&mut self) {
        let (start, end) = self
            .view
            .dialog()
            .draft()
            .map(|d| (d.start_input(), d.end_input()))
            .unwrap_or_default();
        self.start_input = start;
        self.end_input = end;
        self.status = None;
    }
}
