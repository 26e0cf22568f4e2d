//! Typed change notifications and the subscriber registry.
//!
//! Every semantic change to [`LocatorState`] is announced as a [`StateEvent`]
//! to the listeners registered with [`LocatorState::subscribe`]. Delivery is
//! synchronous and in subscription order; it finishes before the mutating
//! call returns.
//!
//! # Re-entrancy
//!
//! Listeners only get a shared borrow of the state, so they cannot mutate it
//! in place. A listener that needs a follow-up change pushes a [`Mutation`]
//! onto the [`Deferred`] queue it is handed; the state applies queued
//! mutations once the current fan-out has finished, in FIFO order.

use crate::app::modes::{ViewMode, ViewportTier};
use crate::app::state::LocatorState;
use crate::domain::{CategoryFilter, Doctor};
use std::fmt;

/// Kind of change a listener is notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateEvent {
    /// The filtered set changed: new items, a new filter, or a new page size.
    ItemsChanged,
    /// The grid page index changed.
    PageChanged,
    /// List/grid mode changed.
    ViewModeChanged,
    /// Pagination and toggle controls were shown or hidden.
    ControlsChanged,
}

/// Handle returned by [`LocatorState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// A state change, applied immediately through the setters or queued from a
/// listener through [`Deferred`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetItems(Vec<Doctor>),
    SetFilter(CategoryFilter),
    SetPageIndex(usize),
    SetViewMode(ViewMode),
    Resize(ViewportTier),
}

/// Mutations requested by listeners during a notification fan-out.
#[derive(Debug, Default)]
pub struct Deferred {
    queue: Vec<Mutation>,
}

impl Deferred {
    /// Queues a mutation to run after every listener has seen the current event.
    pub fn push(&mut self, mutation: Mutation) {
        self.queue.push(mutation);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn take(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.queue)
    }
}

/// Callback invoked for each emitted event.
pub type Listener = Box<dyn FnMut(StateEvent, &LocatorState, &mut Deferred)>;

/// Ordered listener registry owned by the state.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriberId, Listener)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Detaches the listeners so they can be called with a borrow of the state.
    pub(crate) fn detach(&mut self) -> Vec<(SubscriberId, Listener)> {
        std::mem::take(&mut self.entries)
    }

    pub(crate) fn reattach(&mut self, entries: Vec<(SubscriberId, Listener)>) {
        self.entries = entries;
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("next_id", &self.next_id)
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Listener {
        Box::new(|_, _, _| {})
    }

    #[test]
    fn ids_are_unique_and_removal_is_reported() {
        let mut subscribers = Subscribers::default();
        let first = subscribers.add(noop());
        let second = subscribers.add(noop());
        assert_ne!(first, second);

        assert!(subscribers.remove(first));
        assert!(!subscribers.remove(first));
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn deferred_take_empties_the_queue() {
        let mut deferred = Deferred::default();
        deferred.push(Mutation::SetPageIndex(2));
        deferred.push(Mutation::SetViewMode(ViewMode::Grid));

        let taken = deferred.take();
        assert_eq!(taken.len(), 2);
        assert!(deferred.is_empty());
    }
}
