// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::datetime::{format_input, parse_input, truncate_to_minute};
use crate::{DialogError, DraftField, Event, EventDraft, EventId, EventStore, StoreError};

/// Which form the dialog shows, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,

    /// Creating a new event, anchored to the clicked day.
    Creating { anchor: NaiveDate },

    /// Editing the event with the given id.
    Editing { id: EventId },
}

/// The uncommitted content of the event form.
///
/// Color and description stay `None` until set, so saving an untouched edit
/// writes back the event as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl Draft {
    /// An empty draft starting on `anchor` at the time of day `now`.
    pub fn new(anchor: NaiveDate, now: NaiveTime, duration: Duration, color: &str) -> Self {
        let start = truncate_to_minute(NaiveDateTime::new(anchor, now));
        Self {
            title: String::new(),
            start: Some(start),
            end: start.checked_add_signed(duration),
            color: Some(color.to_owned()),
            description: None,
        }
    }

    /// A copy of an existing event's fields.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            start: Some(event.start),
            end: Some(event.end),
            color: event.color.clone(),
            description: event.description.clone(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
    }

    pub fn set_start(&mut self, start: Option<NaiveDateTime>) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Option<NaiveDateTime>) {
        self.end = end;
    }

    /// Sets the start from a `YYYY-MM-DDTHH:mm` input; anything else clears it.
    pub fn set_start_input(&mut self, input: &str) {
        self.start = parse_input(input);
    }

    /// Sets the end from a `YYYY-MM-DDTHH:mm` input; anything else clears it.
    pub fn set_end_input(&mut self, input: &str) {
        self.end = parse_input(input);
    }

    pub fn start_input(&self) -> String {
        format_input(self.start)
    }

    pub fn end_input(&self) -> String {
        format_input(self.end)
    }

    /// Required fields that are empty or absent, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(DraftField::Title);
        }
        if self.start.is_none() {
            missing.push(DraftField::Start);
        }
        if self.end.is_none() {
            missing.push(DraftField::End);
        }
        missing
    }

    /// Validates the draft and converts it into an [`EventDraft`].
    pub fn to_event_draft(&self) -> Result<EventDraft, DialogError> {
        let missing = self.missing_fields();
        let (Some(start), Some(end), true) = (self.start, self.end, missing.is_empty()) else {
            return Err(DialogError::Validation { missing });
        };

        Ok(EventDraft {
            title: self.title.clone(),
            start,
            end,
            color: self.color.clone(),
            description: self.description.clone(),
        })
    }
}

/// The create/edit dialog.
///
/// Always returns to [`DialogState::Closed`] and can be reopened any number
/// of times. A failed save leaves the dialog open with the draft untouched.
#[derive(Debug, Clone, Default)]
pub struct Dialog {
    state: DialogState,
    draft: Option<Draft>,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, DialogState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Opens the form for a new event on `anchor`. Replaces any open draft.
    pub fn open_create(&mut self, anchor: NaiveDate, draft: Draft) {
        tracing::debug!(%anchor, "dialog opened for a new event");
        self.state = DialogState::Creating { anchor };
        self.draft = Some(draft);
    }

    /// Opens the form on a copy of `event`. Replaces any open draft.
    pub fn open_edit(&mut self, event: &Event) {
        tracing::debug!(id = %event.id, "dialog opened for editing");
        self.state = DialogState::Editing {
            id: event.id.clone(),
        };
        self.draft = Some(Draft::from_event(event));
    }

    /// Discards the draft and closes.
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("dialog cancelled");
        }
        self.close();
    }

    /// Commits the draft to the store and closes.
    ///
    /// Returns the id of the created or updated event.
    pub fn save(&mut self, store: &mut EventStore) -> Result<EventId, DialogError> {
        let draft = self.draft.as_ref().ok_or(DialogError::NotOpen)?;
        let event_draft = draft.to_event_draft().inspect_err(|e| {
            tracing::debug!(err = %e, "save blocked");
        })?;

        let id = match &self.state {
            DialogState::Closed => return Err(DialogError::NotOpen),
            DialogState::Creating { .. } => store.add(event_draft),
            DialogState::Editing { id } => {
                let original = store
                    .get(id)
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?;
                let event = event_draft.apply_to(original);
                let id = event.id.clone();
                store.update(event)?;
                id
            }
        };

        self.close();
        Ok(id)
    }

    /// Deletes the edited event and closes, even if the store no longer had it.
    pub fn delete(&mut self, store: &mut EventStore) -> Result<Event, DialogError> {
        let id = match &self.state {
            DialogState::Closed => return Err(DialogError::NotOpen),
            DialogState::Creating { .. } => return Err(DialogError::NotEditing),
            DialogState::Editing { id } => id.clone(),
        };

        self.close();
        Ok(store.delete(&id)?)
    }

    fn close(&mut self) {
        self.state = DialogState::Closed;
        self.draft = None;
    }
}
