// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::{Event, EventDraft, EventId, StoreError};

/// An immutable copy of the event list, as published to subscribers.
pub type Snapshot = Rc<[Event]>;

type Callback = Rc<RefCell<dyn FnMut(&Snapshot)>>;

type Subscribers = RefCell<Vec<(u64, Callback)>>;

/// The single source of truth for the event list.
///
/// Every mutation builds a new [`Snapshot`] and hands it to all subscribers
/// synchronously, so a snapshot held by a reader never changes under it.
/// Callbacks run while the store is mutably borrowed and must not call back
/// into it.
pub struct EventStore {
    events: Snapshot,
    subscribers: Rc<Subscribers>,
    next_subscriber: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    /// Creates a store seeded with the given events, in order.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_subscriber: 0,
        }
    }

    /// Registers a callback that receives the current snapshot immediately
    /// and every following one.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = self.next_subscriber;
        self.next_subscriber += 1;

        let callback: Callback = Rc::new(RefCell::new(callback));
        (callback.borrow_mut())(&self.events);
        self.subscribers.borrow_mut().push((id, callback));

        tracing::debug!(id, "subscriber registered");
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    /// Removes a subscriber. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, subscription: &Subscription) -> bool {
        subscription.unsubscribe()
    }

    /// Appends a new event under a freshly generated id.
    pub fn add(&mut self, draft: EventDraft) -> EventId {
        let id = EventId::generate();
        let mut events = self.events.to_vec();
        events.push(Event::from_draft(id.clone(), draft));

        tracing::debug!(%id, "event added");
        self.publish(events);
        id
    }

    /// Replaces the event with the same id, keeping its position.
    ///
    /// Nothing is published when the id is unknown.
    pub fn update(&mut self, event: Event) -> Result<(), StoreError> {
        let Some(index) = self.position(&event.id) else {
            tracing::debug!(id = %event.id, "update ignored, event not found");
            return Err(StoreError::NotFound(event.id));
        };

        let mut events = self.events.to_vec();
        tracing::debug!(id = %event.id, "event updated");
        events[index] = event;
        self.publish(events);
        Ok(())
    }

    /// Removes the event with the given id and returns it.
    ///
    /// A fresh snapshot is published whether or not the id was found.
    pub fn delete(&mut self, id: &EventId) -> Result<Event, StoreError> {
        let mut events = self.events.to_vec();
        let removed = self.position(id).map(|index| events.remove(index));
        tracing::debug!(%id, found = removed.is_some(), "event deleted");
        self.publish(events);
        removed.ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.events.clone()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|e| &e.id == id)
    }

    fn publish(&mut self, events: Vec<Event>) {
        self.events = events.into();

        // clone the callbacks out so a subscriber may unsubscribe while being notified
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in callbacks {
            (callback.borrow_mut())(&self.events);
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle returned by [`EventStore::subscribe`].
///
/// Dropping the handle keeps the callback registered.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    /// Removes the callback from the store. Returns false if the store is
    /// gone or the callback was already removed.
    pub fn unsubscribe(&self) -> bool {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return false;
        };

        let mut subscribers = subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(id, _)| *id != self.id);
        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!(id = self.id, "subscriber removed");
        }
        removed
    }
}
