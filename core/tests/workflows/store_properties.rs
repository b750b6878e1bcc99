// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties of store mutations as seen through published snapshots.

use std::cell::RefCell;
use std::rc::Rc;

use monthcal_core::{EventId, EventStore, Snapshot, StoreError};

use crate::common::{at, date, test_event_draft};

fn recording_store() -> (EventStore, Rc<RefCell<Vec<Snapshot>>>) {
    let mut store = EventStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
    (store, seen)
}

fn latest(seen: &Rc<RefCell<Vec<Snapshot>>>) -> Snapshot {
    seen.borrow().last().cloned().unwrap()
}

#[test]
fn add_grows_by_one_with_a_fresh_id() {
    let (mut store, seen) = recording_store();
    let day = date(2024, 3, 4);
    let draft = test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30));

    let first = store.add(draft.clone());
    let second = store.add(draft.clone());

    assert_ne!(first, second);
    let snapshot = latest(&seen);
    assert_eq!(snapshot.len(), 2);
    for event in snapshot.iter() {
        assert_eq!(event.title, draft.title);
        assert_eq!(event.start, draft.start);
        assert_eq!(event.end, draft.end);
    }
}

#[test]
fn update_keeps_length_and_replaces_fields() {
    let (mut store, seen) = recording_store();
    let day = date(2024, 3, 4);
    let id = store.add(test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30)));
    store.add(test_event_draft("Lunch", at(day, 12, 0), at(day, 13, 0)));

    let mut changed = store.get(&id).cloned().unwrap();
    changed.title = "Retro".to_string();
    store.update(changed.clone()).unwrap();

    let snapshot = latest(&seen);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0], changed);
    assert_eq!(snapshot[1].title, "Lunch");
}

#[test]
fn update_of_unknown_id_reports_not_found_without_publishing() {
    let (mut store, seen) = recording_store();
    let day = date(2024, 3, 4);
    let id = store.add(test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30)));
    let published = seen.borrow().len();

    let mut ghost = store.get(&id).cloned().unwrap();
    ghost.id = EventId::from("ghost");
    assert_eq!(
        store.update(ghost),
        Err(StoreError::NotFound(EventId::from("ghost")))
    );
    assert_eq!(seen.borrow().len(), published);
}

#[test]
fn delete_twice_matches_delete_once() {
    let (mut once, seen_once) = recording_store();
    let (mut twice, seen_twice) = recording_store();
    let day = date(2024, 3, 4);

    let mut ids = Vec::new();
    for store in [&mut once, &mut twice] {
        store.add(test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30)));
        let target = store.add(test_event_draft("Lunch", at(day, 12, 0), at(day, 13, 0)));
        ids.push(target);
    }

    once.delete(&ids[0]).unwrap();
    twice.delete(&ids[1]).unwrap();
    assert!(twice.delete(&ids[1]).is_err());

    let a: Vec<_> = latest(&seen_once).iter().map(|e| e.title.clone()).collect();
    let b: Vec<_> = latest(&seen_twice).iter().map(|e| e.title.clone()).collect();
    assert_eq!(a, b);
    assert_eq!(a, vec!["Standup".to_string()]);
}

#[test]
fn earlier_snapshots_are_never_mutated() {
    let (mut store, seen) = recording_store();
    let day = date(2024, 3, 4);
    let id = store.add(test_event_draft("Standup", at(day, 9, 0), at(day, 9, 30)));
    let held = latest(&seen);

    store.delete(&id).unwrap();

    assert_eq!(held.len(), 1);
    assert_eq!(held[0].title, "Standup");
    assert!(latest(&seen).is_empty());
}
