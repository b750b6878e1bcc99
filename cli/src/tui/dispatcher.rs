// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

/// Forwards actions emitted by components to the registered stores.
pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Moves the selected day, negative for backwards.
    MoveSelection(i64),
    NextMonth,
    PreviousMonth,
    GoToToday,
    /// Focuses the next event of the selected day.
    CycleEvent,

    OpenCreate,
    EditFocused,

    UpdateTitle(String),
    UpdateStart(String),
    UpdateEnd(String),
    UpdateColor(String),
    UpdateDescription(String),

    Save,
    Cancel,
    Delete,
}
