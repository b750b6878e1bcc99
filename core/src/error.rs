// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use thiserror::Error;

use crate::EventId;

/// Errors reported by the [`EventStore`](crate::EventStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("event not found: {0}")]
    NotFound(EventId),
}

/// Errors reported by the [`Dialog`](crate::Dialog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("missing required fields: {}", join_fields(missing))]
    Validation { missing: Vec<DraftField> },

    #[error("dialog is not open")]
    NotOpen,

    #[error("only an existing event can be deleted")]
    NotEditing,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A field of the dialog draft, used to report what blocks a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Start,
    End,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DraftField::Title => "title",
            DraftField::Start => "start",
            DraftField::End => "end",
        };
        f.write_str(s)
    }
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
