//! Session context: the provider through which views reach the store.
//!
//! A view layer holds an [`AppContext`] and asks it for the store on every
//! gesture. Until a store has been provided, access fails with
//! [`MarqueeError::UninitializedContext`]. That is a programming-contract
//! violation, and callers are expected to bail out rather than recover.

use super::store::Store;
use crate::domain::{MarqueeError, Result};

/// Optional owner of the session store.
#[derive(Debug, Default)]
pub struct AppContext {
    store: Option<Store>,
}

impl AppContext {
    /// Creates a context with the store already provided.
    #[must_use]
    pub const fn with_store(store: Store) -> Self {
        Self { store: Some(store) }
    }

    /// Installs the store, returning any store that was provided before.
    pub fn provide(&mut self, store: Store) -> Option<Store> {
        self.store.replace(store)
    }

    /// Borrows the provided store.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::UninitializedContext`] if no store was provided.
    pub fn store(&self) -> Result<&Store> {
        self.store.as_ref().ok_or(MarqueeError::UninitializedContext)
    }

    /// Mutably borrows the provided store.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::UninitializedContext`] if no store was provided.
    pub fn store_mut(&mut self) -> Result<&mut Store> {
        self.store.as_mut().ok_or(MarqueeError::UninitializedContext)
    }
}
