//! Pure state-transition function for the session store.
//!
//! Every mutation of [`SessionState`] is expressed as an [`Operation`] (tag plus
//! payload) and applied by [`reduce`]. The function is total: it accepts every
//! state and every operation, never fails, and performs no I/O. This keeps the
//! store testable without any view layer attached.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{reduce, Operation, SessionState};
//!
//! let state = reduce(SessionState::default(), Operation::ToggleMute);
//! assert!(!state.is_muted);
//! ```

use super::state::SessionState;
use crate::domain::{Content, ContentId};

/// Named mutations accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Appends the item to the list unless an entry with the same id exists.
    AddToList(Content),
    /// Removes the entry with the given id. No-op if absent.
    RemoveFromList(ContentId),
    /// Replaces the committed search text. Empty strings are allowed.
    SetSearchQuery(String),
    /// Expands or collapses the search affordance.
    SetSearchActive(bool),
    /// Resets the query to empty and collapses the search affordance.
    ClearSearch,
    /// Opens the detail overlay on the item, replacing any open one.
    OpenModal(Content),
    /// Closes the detail overlay.
    CloseModal,
    /// Records whether the page is scrolled past the chrome threshold.
    SetScrolled(bool),
    /// Flips the mute preference.
    ToggleMute,
}

impl Operation {
    /// Short tag used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToList(_) => "add_to_list",
            Self::RemoveFromList(_) => "remove_from_list",
            Self::SetSearchQuery(_) => "set_search_query",
            Self::SetSearchActive(_) => "set_search_active",
            Self::ClearSearch => "clear_search",
            Self::OpenModal(_) => "open_modal",
            Self::CloseModal => "close_modal",
            Self::SetScrolled(_) => "set_scrolled",
            Self::ToggleMute => "toggle_mute",
        }
    }
}

/// Computes the next state from the previous state and an operation.
#[must_use]
pub fn reduce(mut state: SessionState, operation: Operation) -> SessionState {
    match operation {
        Operation::AddToList(item) => {
            if !state.is_in_list(&item.id) {
                state.my_list.push(item);
            }
        }
        Operation::RemoveFromList(id) => {
            state.my_list.retain(|item| item.id != id);
        }
        Operation::SetSearchQuery(query) => {
            state.search_query = query;
        }
        Operation::SetSearchActive(active) => {
            state.search_active = active;
        }
        Operation::ClearSearch => {
            state.search_query.clear();
            state.search_active = false;
        }
        Operation::OpenModal(item) => {
            state.modal_content = Some(item);
        }
        Operation::CloseModal => {
            state.modal_content = None;
        }
        Operation::SetScrolled(scrolled) => {
            state.is_scrolled = scrolled;
        }
        Operation::ToggleMute => {
            state.is_muted = !state.is_muted;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentKind;

    fn item(id: &str, title: &str) -> Content {
        Content::new(id, title, ContentKind::Movie, 2023)
    }

    fn apply(ops: impl IntoIterator<Item = Operation>) -> SessionState {
        ops.into_iter().fold(SessionState::default(), reduce)
    }

    #[test]
    fn add_keeps_insertion_order() {
        let a = item("a", "Oppenheimer");
        let b = item("b", "Glass Onion");
        let state = apply([Operation::AddToList(a.clone()), Operation::AddToList(b.clone())]);

        assert_eq!(state.my_list, vec![a.clone(), b.clone()]);
        assert!(state.is_in_list(&a.id));
        assert!(state.is_in_list(&b.id));
    }

    #[test]
    fn add_same_id_twice_is_noop() {
        let a = item("a", "Oppenheimer");
        let mut renamed = a.clone();
        renamed.title = "Something else".to_string();

        let state = apply([Operation::AddToList(a.clone()), Operation::AddToList(renamed)]);

        assert_eq!(state.my_list.len(), 1);
        assert_eq!(state.my_list[0].title, "Oppenheimer");
    }

    #[test]
    fn remove_on_empty_list_is_noop() {
        let state = apply([Operation::RemoveFromList("missing".into())]);
        assert!(state.my_list.is_empty());
    }

    #[test]
    fn remove_drops_only_matching_entry() {
        let state = apply([
            Operation::AddToList(item("a", "A")),
            Operation::AddToList(item("b", "B")),
            Operation::AddToList(item("c", "C")),
            Operation::RemoveFromList("b".into()),
        ]);

        let ids: Vec<&str> = state.my_list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn open_then_close_modal_resets_both_fields() {
        let state = apply([Operation::OpenModal(item("x", "Dark")), Operation::CloseModal]);
        assert!(!state.modal_open());
        assert!(state.modal_content.is_none());
    }

    #[test]
    fn open_modal_overwrites_previous_item() {
        let state = apply([
            Operation::OpenModal(item("x", "Dark")),
            Operation::OpenModal(item("y", "Ozark")),
        ]);
        assert_eq!(state.modal_content.map(|c| c.title), Some("Ozark".to_string()));
    }

    #[test]
    fn toggle_mute_twice_restores_value() {
        let initial = SessionState::default().is_muted;
        let state = apply([Operation::ToggleMute, Operation::ToggleMute]);
        assert_eq!(state.is_muted, initial);
    }

    #[test]
    fn clear_search_resets_query_and_activation() {
        let state = apply([
            Operation::SetSearchQuery("dune".to_string()),
            Operation::SetSearchActive(true),
            Operation::ClearSearch,
        ]);
        assert_eq!(state.search_query, "");
        assert!(!state.search_active);
        assert!(!state.search_overlay_visible());
    }

    #[test]
    fn empty_query_is_accepted() {
        let state = apply([
            Operation::SetSearchQuery("dune".to_string()),
            Operation::SetSearchQuery(String::new()),
        ]);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn inactive_search_hides_overlay_even_with_query() {
        let state = apply([Operation::SetSearchQuery("dune".to_string())]);
        assert!(!state.search_overlay_visible());
    }

    #[test]
    fn set_scrolled_replaces_flag() {
        let state = apply([Operation::SetScrolled(true)]);
        assert!(state.is_scrolled);
        let state = reduce(state, Operation::SetScrolled(false));
        assert!(!state.is_scrolled);
    }
}
