//! Page routes and card hover state.
//!
//! These types belong to the view layer. Neither is stored in the session
//! store: the route decides which page body is rendered, and the hover state
//! only changes how a card is drawn.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::modes::Route;
//!
//! let route: Route = "my-list".parse().unwrap();
//! assert_eq!(route, Route::MyList);
//! assert_eq!(route.path(), "/my-list");
//! ```

use crate::domain::MarqueeError;
use std::fmt;
use std::str::FromStr;

/// The page currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Hero banner plus the category rows.
    #[default]
    Home,
    /// Genre shelves of movies.
    Movies,
    /// Genre shelves of series.
    TvShows,
    /// The personal list grid.
    MyList,
    /// Full results for a committed query.
    Search {
        /// Query the page was opened with.
        query: String,
    },
}

impl Route {
    /// Location shown in the navbar, mirroring the browser path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Movies => "/movies".to_string(),
            Self::TvShows => "/tv-shows".to_string(),
            Self::MyList => "/my-list".to_string(),
            Self::Search { query } => format!("/search?q={query}"),
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Movies => "Movies",
            Self::TvShows => "TV Shows",
            Self::MyList => "My List",
            Self::Search { .. } => "Search",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = MarqueeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "/" => Ok(Self::Home),
            "movies" | "/movies" => Ok(Self::Movies),
            "tv" | "tv-shows" | "/tv-shows" => Ok(Self::TvShows),
            "list" | "my-list" | "/my-list" => Ok(Self::MyList),
            other => Err(MarqueeError::Config(format!("unknown route: {other}"))),
        }
    }
}

/// Pointer state of an interactive card: `Rest -> Hover -> Rest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Rest,
    Hover,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_route_is_rejected() {
        assert!("settings".parse::<Route>().is_err());
    }

    #[test]
    fn search_path_carries_query() {
        let route = Route::Search { query: "dune".to_string() };
        assert_eq!(route.path(), "/search?q=dune");
        assert_eq!(route.title(), "Search");
    }
}
