//! View model types representing renderable UI state.
//!
//! View models are computed from the session by
//! [`Session::compute_viewmodel`](crate::app::Session::compute_viewmodel) and
//! consumed by the renderer. They hold display-ready data only: titles and
//! labels are already formatted, arrow visibility is already decided, and
//! match highlight ranges are precomputed.
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::viewmodel::{EmptyState, NavbarInfo, PageViewModel};
//!
//! let vm = PageViewModel {
//!     navbar: NavbarInfo {
//!         user_name: "User".to_string(),
//!         page_title: "My List",
//!         path: "/my-list".to_string(),
//!         is_scrolled: false,
//!         is_muted: true,
//!         list_count: 0,
//!     },
//!     search_bar: None,
//!     hero: None,
//!     heading: Some("My List".to_string()),
//!     rows: vec![],
//!     grid: vec![],
//!     empty_state: Some(EmptyState {
//!         message: "Your list is empty".to_string(),
//!         subtitle: "Add shows and movies to keep track of what you want to watch.".to_string(),
//!     }),
//!     modal: None,
//! };
//! assert!(vm.rows.is_empty());
//! ```

/// Complete page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub navbar: NavbarInfo,

    /// Present while search is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Hero banner, shown on the home page only.
    pub hero: Option<HeroInfo>,

    /// Page heading for non-home pages.
    pub heading: Option<String>,

    /// Horizontally scrolling rows (home rows or genre shelves).
    pub rows: Vec<RowView>,

    /// Vertical grid of cards (my list, search results).
    pub grid: Vec<CardView>,

    /// Message shown when the page has nothing to display.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay, present while the modal is open.
    pub modal: Option<ModalInfo>,
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarInfo {
    pub user_name: String,
    pub page_title: &'static str,
    pub path: String,
    /// Solid background once the page has scrolled past the threshold.
    pub is_scrolled: bool,
    pub is_muted: bool,
    pub list_count: usize,
}

/// Expanded search input and its live suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub text: String,
    pub suggestions: Vec<SuggestionItem>,
}

/// One entry of the suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub title: String,
    /// e.g. "2021 · movie".
    pub meta: String,
    pub is_highlighted: bool,
    /// Char ranges of the title matching the typed text, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Featured item banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroInfo {
    pub title: String,
    pub meta: String,
    pub description: String,
    pub is_muted: bool,
    pub in_list: bool,
}

/// One category row or genre shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub cards: Vec<CardView>,
    pub show_left_arrow: bool,
    pub show_right_arrow: bool,
}

/// A single content card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    /// Rank badge in Top 10 rows.
    pub rank: Option<u8>,
    pub meta: String,
    pub in_list: bool,
    /// Hovered cards also show their genres.
    pub is_hovered: bool,
    pub genres: String,
}

/// Empty page message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Detail overlay for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    pub title: String,
    pub meta: String,
    pub description: String,
    pub genres: String,
    pub in_list: bool,
    pub is_muted: bool,
    /// Titles of related items ("More Like This").
    pub similar: Vec<String>,
}
