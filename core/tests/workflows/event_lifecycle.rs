// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from event creation through
//! modification and deletion, going through the dialog as a user would.

use chrono::Weekday;

use monthcal_core::{DEFAULT_COLOR, DialogError, DialogState, DraftField, Event, StoreError};

use crate::common::{assert_titles_on, at, date, test_event_draft, test_view};

#[test]
fn event_lifecycle_create_flow() {
    // Arrange
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 1), 8, 0));
    let day = date(2024, 3, 4);

    // Act
    view.click_date(day);
    assert_eq!(view.dialog().state(), &DialogState::Creating { anchor: day });
    let draft = view.draft_mut().unwrap();
    draft.set_title("Standup");
    draft.set_start_input("2024-03-04T09:00");
    draft.set_end_input("2024-03-04T09:30");
    let id = view.save().unwrap();

    // Assert
    assert!(!view.dialog().is_open());
    let stored = store.borrow().get(&id).cloned().unwrap();
    assert_eq!(stored.title, "Standup");
    assert_eq!(stored.start, at(day, 9, 0));
    assert_eq!(stored.end, at(day, 9, 30));
    assert_titles_on(&view, day, &["Standup"]);
}

#[test]
fn event_lifecycle_survives_month_navigation() {
    // Arrange
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    let day = date(2024, 3, 4);
    view.click_date(day);
    let draft = view.draft_mut().unwrap();
    draft.set_title("Standup");
    draft.set_start_input("2024-03-04T09:00");
    draft.set_end_input("2024-03-04T09:30");
    let id = view.save().unwrap();
    let before: Event = store.borrow().get(&id).cloned().unwrap();
    assert_eq!(before.title, "Standup");
    assert_eq!(before.start, at(day, 9, 0));
    assert_eq!(before.end, at(day, 9, 30));
    assert_eq!(before.color.as_deref(), Some(DEFAULT_COLOR));
    assert_eq!(before.description, None);

    // Act
    view.next_month();
    assert!(view.grid().position(day).is_none());
    view.previous_month();

    // Assert
    let shown = view.events_on(day);
    assert_eq!(shown, vec![before]);
}

#[test]
fn event_lifecycle_untouched_edit_keeps_event() {
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    let day = date(2024, 3, 4);
    let mut seeded = test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30));
    seeded.description = Some(String::new());
    let id = store.borrow_mut().add(seeded);
    let before = store.borrow().get(&id).cloned().unwrap();

    view.click_event(&id).unwrap();
    view.save().unwrap();

    assert_eq!(store.borrow().get(&id), Some(&before));
}

#[test]
fn event_lifecycle_blank_title_is_accepted() {
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    view.click_date(date(2024, 3, 4));
    view.draft_mut().unwrap().set_title("   ");

    let id = view.save().unwrap();

    assert!(!view.dialog().is_open());
    assert_eq!(store.borrow().get(&id).unwrap().title, "   ");
}

#[test]
fn event_lifecycle_update_flow() {
    // Arrange
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    let day = date(2024, 3, 4);
    let id = store
        .borrow_mut()
        .add(test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30)));

    // Act
    view.click_event(&id).unwrap();
    let draft = view.draft_mut().unwrap();
    draft.set_title("Daily standup");
    draft.set_end_input("2024-03-06T09:30");
    draft.set_color("#ef4444");
    let saved = view.save().unwrap();

    // Assert
    assert_eq!(saved, id);
    assert_eq!(store.borrow().len(), 1);
    let stored = store.borrow().get(&id).cloned().unwrap();
    assert_eq!(stored.title, "Daily standup");
    assert_eq!(stored.color.as_deref(), Some("#ef4444"));
    assert_titles_on(&view, date(2024, 3, 6), &["Daily standup"]);
}

#[test]
fn event_lifecycle_empty_title_blocks_edit() {
    // Arrange
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    let day = date(2024, 3, 4);
    let id = store
        .borrow_mut()
        .add(test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30)));
    let before = store.borrow().get(&id).cloned().unwrap();

    // Act
    view.click_event(&id).unwrap();
    view.draft_mut().unwrap().set_title("");
    let err = view.save().unwrap_err();

    // Assert
    assert_eq!(
        err,
        DialogError::Validation {
            missing: vec![DraftField::Title]
        }
    );
    assert!(view.dialog().is_editing());
    assert_eq!(view.dialog().draft().unwrap().title, "");
    assert_eq!(store.borrow().get(&id), Some(&before));
}

#[test]
fn event_lifecycle_unparsable_start_blocks_create() {
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    view.click_date(date(2024, 3, 4));
    let draft = view.draft_mut().unwrap();
    draft.set_title("Lunch");
    draft.set_start_input("2024-03-04 12:00");

    let err = view.save().unwrap_err();
    assert_eq!(
        err,
        DialogError::Validation {
            missing: vec![DraftField::Start]
        }
    );
    assert!(store.borrow().is_empty());
}

#[test]
fn event_lifecycle_delete_flow() {
    // Arrange
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    let day = date(2024, 3, 5);
    let id = store
        .borrow_mut()
        .add(test_event_draft("Review", at(day, 14, 0), at(day, 15, 0)));

    // Act
    view.click_event(&id).unwrap();
    let deleted = view.delete().unwrap();

    // Assert
    assert_eq!(deleted.id, id);
    assert!(!view.dialog().is_open());
    assert!(store.borrow().is_empty());
    assert_titles_on(&view, day, &[]);
}

#[test]
fn event_lifecycle_delete_of_vanished_event_closes() {
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    let day = date(2024, 3, 5);
    let id = store
        .borrow_mut()
        .add(test_event_draft("Review", at(day, 14, 0), at(day, 15, 0)));

    view.click_event(&id).unwrap();
    store.borrow_mut().delete(&id).unwrap();

    let err = view.delete().unwrap_err();
    assert_eq!(err, DialogError::Store(StoreError::NotFound(id)));
    assert!(!view.dialog().is_open());
}

#[test]
fn event_lifecycle_cancel_discards_draft() {
    let (store, mut view) = test_view(Weekday::Mon, at(date(2024, 3, 4), 8, 0));
    view.click_date(date(2024, 3, 8));
    view.draft_mut().unwrap().set_title("Maybe");
    view.cancel();

    assert!(!view.dialog().is_open());
    assert!(store.borrow().is_empty());

    // The dialog can be reopened after closing.
    view.click_date(date(2024, 3, 9));
    assert_eq!(view.dialog().draft().unwrap().title, "");
}
