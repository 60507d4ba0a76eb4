//! The session store: owned state plus the sanctioned operations.
//!
//! [`Store`] holds one [`SessionState`] and exposes the ten named operations of
//! the session. Each mutating operation builds an [`Operation`], runs it through
//! [`reduce`], swaps in the result, and notifies subscribers. Reads are
//! synchronous borrows of the current snapshot.
//!
//! The store is an explicitly owned value. Tests and the driver construct their
//! own instances; nothing is global.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::Store;
//! use marquee::domain::{Content, ContentKind};
//!
//! let mut store = Store::default();
//! let dune = Content::new("sf1", "Dune", ContentKind::Movie, 2021);
//!
//! store.add_to_list(dune.clone());
//! store.add_to_list(dune.clone());
//! assert_eq!(store.state().my_list.len(), 1);
//! assert!(store.is_in_list(&dune.id));
//! ```

use super::reducer::{reduce, Operation};
use super::state::SessionState;
use crate::domain::{Content, ContentId};
use std::fmt;

/// Callback invoked with the new state after every dispatch.
pub type Subscriber = Box<dyn FnMut(&SessionState)>;

/// Owner of the session state.
#[derive(Default)]
pub struct Store {
    state: SessionState,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Store {
    /// Creates a store seeded with `state`.
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot of the session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Registers a callback that runs after every dispatched operation.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&SessionState) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies an operation and notifies subscribers.
    pub fn dispatch(&mut self, operation: Operation) {
        let _span = tracing::debug_span!("dispatch", operation = operation.name()).entered();

        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, operation);

        tracing::trace!(
            list_len = self.state.my_list.len(),
            search_active = self.state.search_active,
            modal_open = self.state.modal_open(),
            "state updated"
        );

        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    pub fn add_to_list(&mut self, item: Content) {
        self.dispatch(Operation::AddToList(item));
    }

    pub fn remove_from_list(&mut self, id: &ContentId) {
        self.dispatch(Operation::RemoveFromList(id.clone()));
    }

    #[must_use]
    pub fn is_in_list(&self, id: &ContentId) -> bool {
        self.state.is_in_list(id)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(Operation::SetSearchQuery(query.into()));
    }

    pub fn set_search_active(&mut self, active: bool) {
        self.dispatch(Operation::SetSearchActive(active));
    }

    pub fn clear_search(&mut self) {
        self.dispatch(Operation::ClearSearch);
    }

    pub fn open_modal(&mut self, item: Content) {
        self.dispatch(Operation::OpenModal(item));
    }

    pub fn close_modal(&mut self) {
        self.dispatch(Operation::CloseModal);
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        self.dispatch(Operation::SetScrolled(scrolled));
    }

    pub fn toggle_mute(&mut self) {
        self.dispatch(Operation::ToggleMute);
    }
}
