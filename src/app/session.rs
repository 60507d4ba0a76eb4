//! The running session: store context, catalog, and view-layer state.
//!
//! [`Session`] bundles everything one driver instance needs. The session store
//! (reached through [`AppContext`]) is the single source of truth for the
//! shared UI fields. The remaining fields here are local view state that no
//! other component reads: the current page, the search bar's typed text, the
//! hovered card, and per-row scroll offsets.
//!
//! # View Model Computation
//!
//! [`Session::compute_viewmodel`] turns a snapshot of the store plus the view
//! state into a [`PageViewModel`]. Row windows are derived from the terminal
//! width: the visible strip is as many card strides as the row renderer can
//! draw side by side, so a row's cards are exactly the ones on screen.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{AppContext, Session, Store};
//! use marquee::catalog::Catalog;
//! use marquee::ui::Theme;
//!
//! let session = Session::new(
//!     AppContext::with_store(Store::default()),
//!     Catalog::built_in()?,
//!     Theme::default(),
//!     100,
//! );
//! let vm = session.compute_viewmodel()?;
//! assert!(vm.hero.is_some());
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use super::context::AppContext;
use super::modes::{HoverState, Route};
use super::search_bar::SearchBar;
use super::state::SessionState;
use crate::catalog::{self, Catalog};
use crate::domain::{Content, ContentId, Result};
use crate::ui::components::row::cards_per_row;
use crate::ui::scroll::{strip_width, RowScroll};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardView, EmptyState, HeroInfo, ModalInfo, NavbarInfo, PageViewModel, RowView, SearchBarInfo,
    SuggestionItem,
};
use std::collections::HashMap;

/// Number of related titles listed in the detail overlay.
const SIMILAR_LIMIT: usize = 3;

/// Series shown in the grid above the TV Shows shelves.
const TV_FEATURED_LIMIT: usize = 8;

/// A row as laid out on the current page, before windowing.
#[derive(Debug, Clone)]
pub struct PageRow {
    pub id: String,
    pub title: String,
    pub items: Vec<Content>,
}

/// One driver's worth of state.
#[derive(Debug)]
pub struct Session {
    pub context: AppContext,
    pub catalog: Catalog,
    pub theme: Theme,
    pub route: Route,
    pub search_bar: SearchBar,
    /// Card under the pointer, at most one at a time.
    pub hovered: Option<ContentId>,
    /// Scroll offsets keyed by row id. Rows never scrolled are absent.
    pub row_scroll: HashMap<String, RowScroll>,
    /// Terminal width in columns.
    pub width: usize,
}

impl Session {
    #[must_use]
    pub fn new(context: AppContext, catalog: Catalog, theme: Theme, width: usize) -> Self {
        Self {
            context,
            catalog,
            theme,
            route: Route::Home,
            search_bar: SearchBar::default(),
            hovered: None,
            row_scroll: HashMap::new(),
            width,
        }
    }

    /// Pretty-printed JSON snapshot of the store state.
    ///
    /// # Errors
    ///
    /// Fails if no store has been provided.
    pub fn state_json(&self) -> Result<String> {
        let state = self.context.store()?.state();
        Ok(serde_json::to_string_pretty(state)?)
    }

    /// Switches pages. Hover is dropped; scroll offsets are kept per row.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.route, to = %route, "navigating");
        self.route = route;
        self.hovered = None;
    }

    #[must_use]
    pub fn hover_state(&self, id: &ContentId) -> HoverState {
        if self.hovered.as_ref() == Some(id) {
            HoverState::Hover
        } else {
            HoverState::Rest
        }
    }

    /// Cards visible at once in a row at the current width.
    #[must_use]
    pub fn row_window(&self) -> usize {
        cards_per_row(self.width)
    }

    /// Visible strip width in pixels.
    #[must_use]
    pub fn viewport_px(&self) -> f64 {
        strip_width(self.row_window())
    }

    /// Rows shown on the current page, in display order.
    #[must_use]
    pub fn page_rows(&self) -> Vec<PageRow> {
        self.rows_on(&self.route)
    }

    /// Re-clamps every saved row offset, on any page, to the current width.
    pub fn clamp_row_scroll(&mut self) {
        let visible = self.viewport_px();
        let lengths: HashMap<String, usize> = [Route::Home, Route::Movies, Route::TvShows]
            .iter()
            .flat_map(|route| self.rows_on(route))
            .map(|row| (row.id, row.items.len()))
            .collect();

        for (id, scroll) in &mut self.row_scroll {
            if let Some(&len) = lengths.get(id) {
                scroll.clamp(strip_width(len), visible);
            }
        }
    }

    fn rows_on(&self, route: &Route) -> Vec<PageRow> {
        match route {
            Route::Home => self
                .catalog
                .rows
                .iter()
                .map(|row| PageRow {
                    id: row.id.clone(),
                    title: row.title.clone(),
                    items: row.items.clone(),
                })
                .collect(),
            Route::Movies => shelf_rows("movies", self.catalog.movie_shelves()),
            Route::TvShows => shelf_rows("tv", self.catalog.tv_shelves()),
            Route::MyList | Route::Search { .. } => vec![],
        }
    }

    /// Total and visible width of a row on the current page.
    #[must_use]
    pub fn row_geometry(&self, row_id: &str) -> Option<(f64, f64)> {
        self.page_rows()
            .into_iter()
            .find(|row| row.id == row_id)
            .map(|row| (strip_width(row.items.len()), self.viewport_px()))
    }

    /// Computes the page view model from the store snapshot and view state.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::UninitializedContext`](crate::MarqueeError::UninitializedContext)
    /// if no store has been provided.
    pub fn compute_viewmodel(&self) -> Result<PageViewModel> {
        let state = self.context.store()?.state();

        let _span = tracing::debug_span!("compute_viewmodel",
            route = %self.route,
            width = self.width
        ).entered();

        let navbar = NavbarInfo {
            user_name: state.user.name.clone(),
            page_title: self.route.title(),
            path: self.route.path(),
            is_scrolled: state.is_scrolled,
            is_muted: state.is_muted,
            list_count: state.my_list.len(),
        };

        let search_bar = state
            .search_overlay_visible()
            .then(|| self.compute_search_bar());

        let mut vm = PageViewModel {
            navbar,
            search_bar,
            hero: None,
            heading: None,
            rows: vec![],
            grid: vec![],
            empty_state: None,
            modal: state
                .modal_content
                .as_ref()
                .map(|item| self.compute_modal(item, state)),
        };

        match &self.route {
            Route::Home => {
                vm.hero = Some(self.compute_hero(state));
                vm.rows = self.compute_rows(state);
            }
            Route::Movies => {
                vm.heading = Some(self.route.title().to_string());
                vm.rows = self.compute_rows(state);
            }
            Route::TvShows => {
                vm.heading = Some(self.route.title().to_string());
                let shows = self.catalog.tv_shows();
                vm.grid = self.compute_cards(&shows[..shows.len().min(TV_FEATURED_LIMIT)], state);
                vm.rows = self.compute_rows(state);
            }
            Route::MyList => {
                vm.heading = Some("My List".to_string());
                vm.grid = self.compute_cards(&state.my_list, state);
                if vm.grid.is_empty() {
                    vm.empty_state = Some(EmptyState {
                        message: "Your list is empty".to_string(),
                        subtitle: "Add shows and movies to keep track of what you want to watch."
                            .to_string(),
                    });
                }
            }
            Route::Search { query } => {
                let results = catalog::full_results(query, &self.catalog.all_content());
                vm.heading = Some(format!("Results for \"{query}\" ({})", results.len()));
                vm.grid = self.compute_cards(&results, state);
                if vm.grid.is_empty() {
                    vm.empty_state = Some(if query.chars().count() < catalog::MIN_QUERY_CHARS {
                        EmptyState {
                            message: "Search for something".to_string(),
                            subtitle: "Type at least two characters to search titles and genres."
                                .to_string(),
                        }
                    } else {
                        EmptyState {
                            message: format!("No results for \"{query}\""),
                            subtitle: "Try a different title or genre.".to_string(),
                        }
                    });
                }
            }
        }

        Ok(vm)
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let highlighted = self.search_bar.highlighted_index();
        let suggestions = self
            .search_bar
            .suggestions()
            .iter()
            .enumerate()
            .map(|(i, item)| SuggestionItem {
                title: item.title.clone(),
                meta: format!("{} · {}", item.year, item.kind),
                is_highlighted: highlighted == Some(i),
                highlight_ranges: catalog::highlight_ranges(&item.title, self.search_bar.text()),
            })
            .collect();

        SearchBarInfo {
            text: self.search_bar.text().to_string(),
            suggestions,
        }
    }

    fn compute_hero(&self, state: &SessionState) -> HeroInfo {
        let featured = &self.catalog.featured;
        HeroInfo {
            title: featured.title.clone(),
            meta: meta_line(featured),
            description: featured.description.clone(),
            is_muted: state.is_muted,
            in_list: state.is_in_list(&featured.id),
        }
    }

    fn compute_rows(&self, state: &SessionState) -> Vec<RowView> {
        let visible_px = self.viewport_px();
        let window = self.row_window();

        self.page_rows()
            .into_iter()
            .map(|row| {
                let scroll = self.row_scroll.get(&row.id).copied().unwrap_or_default();
                let affordance = scroll.affordance(strip_width(row.items.len()), visible_px);
                let start = scroll
                    .first_visible_card()
                    .min(row.items.len().saturating_sub(window));
                let end = (start + window).min(row.items.len());

                RowView {
                    cards: self.compute_cards(&row.items[start..end], state),
                    id: row.id,
                    title: row.title,
                    show_left_arrow: affordance.can_scroll_left,
                    show_right_arrow: affordance.can_scroll_right,
                }
            })
            .collect()
    }

    fn compute_cards(&self, items: &[Content], state: &SessionState) -> Vec<CardView> {
        items
            .iter()
            .map(|item| CardView {
                id: item.id.to_string(),
                title: item.title.clone(),
                rank: item.rank,
                meta: meta_line(item),
                in_list: state.is_in_list(&item.id),
                is_hovered: self.hover_state(&item.id) == HoverState::Hover,
                genres: item.genres.join(" • "),
            })
            .collect()
    }

    fn compute_modal(&self, item: &Content, state: &SessionState) -> ModalInfo {
        ModalInfo {
            title: item.title.clone(),
            meta: meta_line(item),
            description: item.description.clone(),
            genres: item.genres.join(", "),
            in_list: state.is_in_list(&item.id),
            is_muted: state.is_muted,
            similar: self
                .catalog
                .similar_to(item, SIMILAR_LIMIT)
                .into_iter()
                .map(|c| c.title)
                .collect(),
        }
    }
}

fn shelf_rows(prefix: &str, shelves: Vec<catalog::Shelf>) -> Vec<PageRow> {
    shelves
        .into_iter()
        .filter(|shelf| !shelf.items.is_empty())
        .map(|shelf| PageRow {
            id: format!("{prefix}-{}", slug(shelf.title)),
            title: shelf.title.to_string(),
            items: shelf.items,
        })
        .collect()
}

/// Lowercases and joins alphanumeric runs with `-`: "Sci-Fi & Fantasy" -> "sci-fi-fantasy".
fn slug(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn meta_line(item: &Content) -> String {
    [
        item.year.to_string(),
        item.maturity_rating.clone(),
        item.runtime_label(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Store;
    use crate::MarqueeError;

    fn session() -> Session {
        Session::new(
            AppContext::with_store(Store::default()),
            Catalog::built_in().unwrap(),
            Theme::default(),
            100,
        )
    }

    #[test]
    fn slug_joins_words() {
        assert_eq!(slug("Sci-Fi & Fantasy"), "sci-fi-fantasy");
        assert_eq!(slug("Drama"), "drama");
    }

    #[test]
    fn home_shows_hero_and_every_row() {
        let vm = session().compute_viewmodel().unwrap();
        assert_eq!(vm.hero.as_ref().map(|h| h.title.as_str()), Some("The Crown"));
        assert_eq!(vm.rows.len(), 6);
        assert!(vm.rows.iter().all(|row| !row.show_left_arrow));
        assert!(vm.search_bar.is_none());
        assert!(vm.modal.is_none());
    }

    #[test]
    fn row_window_follows_viewport_width() {
        let vm = session().compute_viewmodel().unwrap();
        // 98 columns between the arrows hold three 31-column cards.
        assert_eq!(vm.rows[0].cards.len(), 3);
        assert!(vm.rows[0].show_right_arrow);
    }

    #[test]
    fn fully_scrolled_row_ends_on_last_card() {
        for width in [60, 100, 120, 200] {
            let mut s = session();
            s.width = width;
            let (total, visible) = s.row_geometry("trending").unwrap();
            let scroll = s.row_scroll.entry("trending".to_string()).or_default();
            for _ in 0..10 {
                scroll.scroll_right(total, visible);
            }

            let vm = s.compute_viewmodel().unwrap();
            let row = &vm.rows[0];
            assert_eq!(row.cards.len(), s.row_window().min(8), "width {width}");
            assert_eq!(row.cards.last().map(|c| c.title.as_str()), Some("The Witcher"));
            assert!(!row.show_right_arrow);
        }
    }

    #[test]
    fn clamp_reaches_rows_on_other_pages() {
        let mut s = session();
        s.width = 60;
        s.navigate(Route::Movies);
        let (total, visible) = s.row_geometry("movies-drama").unwrap();
        let scroll = s.row_scroll.entry("movies-drama".to_string()).or_default();
        for _ in 0..10 {
            scroll.scroll_right(total, visible);
        }

        s.navigate(Route::Home);
        s.width = 200;
        s.clamp_row_scroll();

        s.navigate(Route::Movies);
        let (total, visible) = s.row_geometry("movies-drama").unwrap();
        assert!(s.row_scroll["movies-drama"].offset() <= (total - visible).max(0.0));
    }

    #[test]
    fn tv_page_features_first_shows_above_shelves() {
        let mut s = session();
        s.navigate(Route::TvShows);
        let vm = s.compute_viewmodel().unwrap();

        assert_eq!(vm.grid.len(), 8);
        assert_eq!(vm.grid[0].id, "n1");
        assert!(!vm.rows.is_empty());

        s.navigate(Route::Movies);
        assert!(s.compute_viewmodel().unwrap().grid.is_empty());
    }

    #[test]
    fn empty_list_page_has_empty_state() {
        let mut session = session();
        session.navigate(Route::MyList);
        let vm = session.compute_viewmodel().unwrap();
        assert!(vm.grid.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn shelves_have_unique_ids() {
        let mut session = session();
        session.navigate(Route::Movies);
        let rows = session.page_rows();
        assert!(rows.iter().any(|row| row.id == "movies-action-adventure"));
        assert!(session.row_geometry("movies-drama").is_some());
        assert!(session.row_geometry("trending").is_none());
    }

    #[test]
    fn unprovided_store_fails_viewmodel() {
        let session = Session::new(
            AppContext::default(),
            Catalog::built_in().unwrap(),
            Theme::default(),
            80,
        );
        assert!(matches!(
            session.compute_viewmodel(),
            Err(MarqueeError::UninitializedContext)
        ));
    }

    #[test]
    fn state_json_reflects_store() {
        let mut s = session();
        s.context.store_mut().unwrap().toggle_mute();

        let json: serde_json::Value = serde_json::from_str(&s.state_json().unwrap()).unwrap();
        assert_eq!(json["is_muted"], serde_json::Value::Bool(false));
        assert_eq!(json["my_list"], serde_json::json!([]));
    }
}
