//! Session state container.
//!
//! This module defines [`SessionState`], the single source of truth for the
//! UI-session fields owned by the store: list membership, search text and
//! activation, the open modal, the scroll flag, and the mute preference.
//!
//! # Architecture
//!
//! `SessionState` is a plain value. It is never mutated in place by callers;
//! the reducer in [`super::reducer`] produces a new value for every operation,
//! and the [`super::store::Store`] swaps it in. All methods here are read-only
//! queries.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::SessionState;
//!
//! let state = SessionState::default();
//! assert!(state.my_list.is_empty());
//! assert!(state.is_muted);
//! assert!(!state.modal_open());
//! ```

use crate::domain::{Content, ContentId, User};
use serde::Serialize;

/// Session UI state for one running application instance.
///
/// The modal is represented as a single `Option<Content>`, so the modal is
/// open exactly when content is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Display identity. Static for the lifetime of the session.
    pub user: User,

    /// Personal list in insertion order, unique by id.
    pub my_list: Vec<Content>,

    /// Committed search text. Set on explicit submission, not per keystroke.
    pub search_query: String,

    /// Whether the search input affordance is expanded.
    pub search_active: bool,

    /// Item shown in the detail overlay, if the overlay is open.
    pub modal_content: Option<Content>,

    /// Whether the page has scrolled past the chrome threshold.
    pub is_scrolled: bool,

    /// Global video-playback mute preference.
    pub is_muted: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(User::default())
    }
}

impl SessionState {
    /// Creates the initial session state for a user.
    ///
    /// The list is empty, search is inactive, no modal is open, the page is at
    /// the top, and playback starts muted.
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self {
            user,
            my_list: Vec::new(),
            search_query: String::new(),
            search_active: false,
            modal_content: None,
            is_scrolled: false,
            is_muted: true,
        }
    }

    /// Returns `true` iff an entry with `id` is in the personal list.
    #[must_use]
    pub fn is_in_list(&self, id: &ContentId) -> bool {
        self.my_list.iter().any(|item| &item.id == id)
    }

    #[must_use]
    pub const fn modal_open(&self) -> bool {
        self.modal_content.is_some()
    }

    /// Whether the search overlay should be shown.
    ///
    /// An inactive search never shows its overlay, whatever the query holds.
    #[must_use]
    pub fn search_overlay_visible(&self) -> bool {
        self.search_active
    }
}
