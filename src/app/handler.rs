//! Event handling and state transition logic.
//!
//! This module translates user gestures into session store operations and
//! view-state changes. It is the only place where the view layer invokes the
//! store.
//!
//! # Architecture
//!
//! 1. The driver turns input into an [`Event`]
//! 2. [`handle_event`] reaches the store through the session's context and
//!    invokes the named operations
//! 3. Local view state (search bar text, hover, row offsets) is updated
//! 4. A render flag and a list of [`Action`]s are returned to the driver
//!
//! # Event Types
//!
//! - **Search**: `OpenSearch`, `TypeText`, `HighlightNext`, `HighlightPrevious`,
//!   `SubmitSearch`, `OutsideClick`
//! - **Content**: `SelectContent`, `AddToList`, `RemoveFromList`, `ToggleList`
//! - **Chrome**: `Escape`, `CloseModal`, `PageScrolled`, `ToggleMute`, `Resize`
//! - **Rows**: `PointerEnter`, `PointerLeave`, `ScrollRowLeft`, `ScrollRowRight`
//! - **Navigation**: `Navigate`, `Quit`
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, AppContext, Event, Session, Store};
//! use marquee::catalog::Catalog;
//! use marquee::ui::Theme;
//!
//! let mut session = Session::new(
//!     AppContext::with_store(Store::default()),
//!     Catalog::built_in()?,
//!     Theme::default(),
//!     100,
//! );
//! let (needs_render, actions) = handle_event(&mut session, &Event::ToggleMute)?;
//! assert!(needs_render);
//! assert!(actions.is_empty());
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use super::actions::Action;
use super::modes::Route;
use super::session::Session;
use crate::domain::{ContentId, Result};

/// Page scroll distance past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Gestures from the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Expands the search input.
    OpenSearch,
    /// Replaces the search input text (live suggestions follow).
    TypeText(String),
    /// Moves the suggestion highlight down.
    HighlightNext,
    /// Moves the suggestion highlight up (above the first clears it).
    HighlightPrevious,
    /// Enter in the search input.
    SubmitSearch,
    /// Click anywhere outside the search bar.
    OutsideClick,
    /// Escape key: closes the modal if open, otherwise closes search.
    Escape,

    /// Opens the detail overlay for a catalog item.
    SelectContent(ContentId),
    /// Adds a catalog item to the personal list.
    AddToList(ContentId),
    /// Removes an item from the personal list.
    RemoveFromList(ContentId),
    /// Adds the item if absent, removes it if present.
    ToggleList(ContentId),
    /// Closes the detail overlay.
    CloseModal,

    /// Vertical page scroll position changed.
    PageScrolled {
        /// Distance from the top of the page in pixels.
        y: f64,
    },
    /// Flips the mute preference.
    ToggleMute,
    /// Terminal width changed.
    Resize {
        /// New width in columns.
        width: usize,
    },

    /// Pointer entered a card.
    PointerEnter(ContentId),
    /// Pointer left the hovered card.
    PointerLeave,
    /// Left arrow on a row.
    ScrollRowLeft(String),
    /// Right arrow on a row.
    ScrollRowRight(String),

    /// Switches page.
    Navigate(Route),
    /// Ends the session.
    Quit,
}

/// Processes an event, mutates the session, and returns actions to execute.
///
/// The boolean is `true` when the view should re-render.
///
/// # Errors
///
/// Returns [`MarqueeError::UninitializedContext`](crate::MarqueeError::UninitializedContext)
/// if the session has no store.
#[allow(clippy::too_many_lines)]
pub fn handle_event(session: &mut Session, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::OpenSearch => {
            session.context.store_mut()?.set_search_active(true);
            Ok((true, vec![]))
        }
        Event::TypeText(text) => {
            if !session.context.store()?.state().search_active {
                tracing::debug!("search inactive, ignoring typed text");
                return Ok((false, vec![]));
            }
            let corpus = session.catalog.all_content();
            session.search_bar.set_text(text.clone(), &corpus);
            Ok((true, vec![]))
        }
        Event::HighlightNext => {
            session.search_bar.highlight_next();
            Ok((true, vec![]))
        }
        Event::HighlightPrevious => {
            session.search_bar.highlight_previous();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => submit_search(session),
        Event::OutsideClick => {
            let store = session.context.store_mut()?;
            if store.state().search_active && session.search_bar.text().is_empty() {
                tracing::debug!("collapsing empty search on outside click");
                store.set_search_active(false);
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Escape => {
            let store = session.context.store_mut()?;
            if store.state().modal_open() {
                store.close_modal();
                return Ok((true, vec![]));
            }
            if store.state().search_active {
                close_search(session)?;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::SelectContent(id) => {
            let Some(item) = session.catalog.find(id).cloned() else {
                tracing::debug!(item_id = %id, "selected content not in catalog");
                return Ok((false, vec![]));
            };
            tracing::debug!(item_id = %id, title = %item.title, "opening detail modal");
            session.context.store_mut()?.open_modal(item);
            Ok((true, vec![]))
        }
        Event::AddToList(id) => {
            let Some(item) = session.catalog.find(id).cloned() else {
                tracing::debug!(item_id = %id, "cannot add unknown content");
                return Ok((false, vec![]));
            };
            session.context.store_mut()?.add_to_list(item);
            Ok((true, vec![]))
        }
        Event::RemoveFromList(id) => {
            session.context.store_mut()?.remove_from_list(id);
            Ok((true, vec![]))
        }
        Event::ToggleList(id) => {
            let store = session.context.store_mut()?;
            if store.is_in_list(id) {
                store.remove_from_list(id);
                return Ok((true, vec![]));
            }
            match session.catalog.find(id).cloned() {
                Some(item) => {
                    store.add_to_list(item);
                    Ok((true, vec![]))
                }
                None => {
                    tracing::debug!(item_id = %id, "cannot add unknown content");
                    Ok((false, vec![]))
                }
            }
        }
        Event::CloseModal => {
            let store = session.context.store_mut()?;
            if !store.state().modal_open() {
                return Ok((false, vec![]));
            }
            store.close_modal();
            Ok((true, vec![]))
        }
        Event::PageScrolled { y } => {
            let scrolled = *y > SCROLL_THRESHOLD_PX;
            let store = session.context.store_mut()?;
            if store.state().is_scrolled == scrolled {
                return Ok((false, vec![]));
            }
            store.set_scrolled(scrolled);
            Ok((true, vec![]))
        }
        Event::ToggleMute => {
            session.context.store_mut()?.toggle_mute();
            Ok((true, vec![]))
        }
        Event::Resize { width } => {
            session.width = *width;
            session.clamp_row_scroll();
            Ok((true, vec![]))
        }
        Event::PointerEnter(id) => {
            if session.hovered.as_ref() == Some(id) {
                return Ok((false, vec![]));
            }
            session.hovered = Some(id.clone());
            Ok((true, vec![]))
        }
        Event::PointerLeave => Ok((session.hovered.take().is_some(), vec![])),
        Event::ScrollRowLeft(row_id) => {
            if session.row_geometry(row_id).is_none() {
                tracing::debug!(row_id = %row_id, "row not on this page");
                return Ok((false, vec![]));
            }
            session.row_scroll.entry(row_id.clone()).or_default().scroll_left();
            Ok((true, vec![]))
        }
        Event::ScrollRowRight(row_id) => {
            let Some((total, visible)) = session.row_geometry(row_id) else {
                tracing::debug!(row_id = %row_id, "row not on this page");
                return Ok((false, vec![]));
            };
            session
                .row_scroll
                .entry(row_id.clone())
                .or_default()
                .scroll_right(total, visible);
            Ok((true, vec![]))
        }
        Event::Navigate(route) => Ok((false, vec![Action::Navigate(route.clone())])),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Enter in the search input.
///
/// A highlighted suggestion opens its detail overlay and closes search.
/// Otherwise non-blank text is committed as the query and the results page
/// is opened.
fn submit_search(session: &mut Session) -> Result<(bool, Vec<Action>)> {
    if let Some(item) = session.search_bar.highlighted().cloned() {
        tracing::debug!(item_id = %item.id, "opening highlighted suggestion");
        session.context.store_mut()?.open_modal(item);
        close_search(session)?;
        return Ok((true, vec![]));
    }

    let text = session.search_bar.text().to_string();
    if text.trim().is_empty() {
        return Ok((false, vec![]));
    }

    tracing::debug!(query = %text, "search submitted");
    let store = session.context.store_mut()?;
    store.set_search_query(text.clone());
    store.set_search_active(false);

    session.search_bar.dismiss_suggestions();

    Ok((true, vec![Action::Navigate(Route::Search { query: text })]))
}

/// Resets the search bar and clears the committed search in the store.
fn close_search(session: &mut Session) -> Result<()> {
    session.search_bar.reset();
    let store = session.context.store_mut()?;
    store.set_search_active(false);
    store.clear_search();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppContext, Store};
    use crate::catalog::Catalog;
    use crate::ui::Theme;
    use crate::MarqueeError;

    fn session() -> Session {
        Session::new(
            AppContext::with_store(Store::default()),
            Catalog::built_in().unwrap(),
            Theme::default(),
            100,
        )
    }

    fn state(session: &Session) -> &crate::app::SessionState {
        session.context.store().unwrap().state()
    }

    #[test]
    fn typing_requires_active_search() {
        let mut s = session();
        let (render, _) = handle_event(&mut s, &Event::TypeText("du".into())).unwrap();
        assert!(!render);
        assert!(s.search_bar.suggestions().is_empty());

        handle_event(&mut s, &Event::OpenSearch).unwrap();
        handle_event(&mut s, &Event::TypeText("du".into())).unwrap();
        assert!(!s.search_bar.suggestions().is_empty());
    }

    #[test]
    fn submit_commits_query_and_navigates() {
        let mut s = session();
        handle_event(&mut s, &Event::OpenSearch).unwrap();
        handle_event(&mut s, &Event::TypeText("dune".into())).unwrap();

        let (_, actions) = handle_event(&mut s, &Event::SubmitSearch).unwrap();

        assert_eq!(actions, vec![Action::Navigate(Route::Search { query: "dune".into() })]);
        assert_eq!(state(&s).search_query, "dune");
        assert!(!state(&s).search_active);
        assert!(s.search_bar.suggestions().is_empty());
    }

    #[test]
    fn blank_submit_does_nothing() {
        let mut s = session();
        handle_event(&mut s, &Event::OpenSearch).unwrap();
        handle_event(&mut s, &Event::TypeText("   ".into())).unwrap();

        let (render, actions) = handle_event(&mut s, &Event::SubmitSearch).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state(&s).search_active);
    }

    #[test]
    fn submit_with_highlight_opens_modal() {
        let mut s = session();
        handle_event(&mut s, &Event::OpenSearch).unwrap();
        handle_event(&mut s, &Event::TypeText("dune".into())).unwrap();
        handle_event(&mut s, &Event::HighlightNext).unwrap();

        let (_, actions) = handle_event(&mut s, &Event::SubmitSearch).unwrap();

        assert!(actions.is_empty());
        assert_eq!(
            state(&s).modal_content.as_ref().map(|c| c.title.as_str()),
            Some("Dune")
        );
        assert!(!state(&s).search_active);
        assert_eq!(s.search_bar.text(), "");
    }

    #[test]
    fn escape_closes_modal_before_search() {
        let mut s = session();
        handle_event(&mut s, &Event::OpenSearch).unwrap();
        handle_event(&mut s, &Event::SelectContent("t1".into())).unwrap();

        handle_event(&mut s, &Event::Escape).unwrap();
        assert!(!state(&s).modal_open());
        assert!(state(&s).search_active);

        handle_event(&mut s, &Event::TypeText("oz".into())).unwrap();
        handle_event(&mut s, &Event::Escape).unwrap();
        assert!(!state(&s).search_active);
        assert_eq!(state(&s).search_query, "");
        assert_eq!(s.search_bar.text(), "");
    }

    #[test]
    fn outside_click_only_collapses_empty_search() {
        let mut s = session();
        handle_event(&mut s, &Event::OpenSearch).unwrap();
        handle_event(&mut s, &Event::TypeText("oz".into())).unwrap();

        handle_event(&mut s, &Event::OutsideClick).unwrap();
        assert!(state(&s).search_active);

        handle_event(&mut s, &Event::TypeText(String::new())).unwrap();
        handle_event(&mut s, &Event::OutsideClick).unwrap();
        assert!(!state(&s).search_active);
    }

    #[test]
    fn page_scroll_crosses_threshold() {
        let mut s = session();
        let (render, _) = handle_event(&mut s, &Event::PageScrolled { y: 50.0 }).unwrap();
        assert!(!render);
        assert!(!state(&s).is_scrolled);

        handle_event(&mut s, &Event::PageScrolled { y: 51.0 }).unwrap();
        assert!(state(&s).is_scrolled);

        handle_event(&mut s, &Event::PageScrolled { y: 0.0 }).unwrap();
        assert!(!state(&s).is_scrolled);
    }

    #[test]
    fn toggle_list_flips_membership() {
        let mut s = session();
        let id = ContentId::from("n4");

        handle_event(&mut s, &Event::ToggleList(id.clone())).unwrap();
        assert!(state(&s).is_in_list(&id));

        handle_event(&mut s, &Event::ToggleList(id.clone())).unwrap();
        assert!(!state(&s).is_in_list(&id));
    }

    #[test]
    fn unknown_content_is_ignored() {
        let mut s = session();
        let (render, _) = handle_event(&mut s, &Event::AddToList("nope".into())).unwrap();
        assert!(!render);
        assert!(state(&s).my_list.is_empty());
    }

    #[test]
    fn hover_is_exclusive() {
        let mut s = session();
        handle_event(&mut s, &Event::PointerEnter("t1".into())).unwrap();
        handle_event(&mut s, &Event::PointerEnter("t2".into())).unwrap();

        assert_eq!(s.hover_state(&"t1".into()), crate::app::HoverState::Rest);
        assert_eq!(s.hover_state(&"t2".into()), crate::app::HoverState::Hover);

        let (render, _) = handle_event(&mut s, &Event::PointerLeave).unwrap();
        assert!(render);
        let (render, _) = handle_event(&mut s, &Event::PointerLeave).unwrap();
        assert!(!render);
    }

    #[test]
    fn row_arrows_move_and_clamp() {
        let mut s = session();
        handle_event(&mut s, &Event::ScrollRowRight("trending".into())).unwrap();
        let vm = s.compute_viewmodel().unwrap();
        assert!(vm.rows[0].show_left_arrow);

        handle_event(&mut s, &Event::ScrollRowRight("trending".into())).unwrap();
        handle_event(&mut s, &Event::ScrollRowRight("trending".into())).unwrap();
        let vm = s.compute_viewmodel().unwrap();
        assert!(!vm.rows[0].show_right_arrow);

        let (render, _) = handle_event(&mut s, &Event::ScrollRowLeft("missing".into())).unwrap();
        assert!(!render);
    }

    #[test]
    fn widening_clamps_scrolled_rows() {
        let mut s = session();
        handle_event(&mut s, &Event::Resize { width: 60 }).unwrap();
        for _ in 0..3 {
            handle_event(&mut s, &Event::ScrollRowRight("trending".into())).unwrap();
        }

        handle_event(&mut s, &Event::Resize { width: 200 }).unwrap();
        let (total, visible) = s.row_geometry("trending").unwrap();
        let offset = s.row_scroll["trending"].offset();
        assert!((offset - (total - visible)).abs() < f64::EPSILON);

        let vm = s.compute_viewmodel().unwrap();
        let trending = &vm.rows[0];
        assert!(trending.show_left_arrow);
        assert!(!trending.show_right_arrow);
        assert_eq!(trending.cards.len(), 6);
        assert_eq!(trending.cards[0].title, "Glass Onion");
    }

    #[test]
    fn missing_store_surfaces_error() {
        let mut s = Session::new(
            AppContext::default(),
            Catalog::built_in().unwrap(),
            Theme::default(),
            80,
        );
        let result = handle_event(&mut s, &Event::ToggleMute);
        assert!(matches!(result, Err(MarqueeError::UninitializedContext)));
    }
}
