//! Read-only content catalog.
//!
//! The catalog supplies everything the pages display: the featured hero item,
//! the home page category rows, and the derived Movies/TV collections and genre
//! shelves. It is loaded once from TOML, either the built-in catalog embedded in
//! the binary or a user-supplied file, and never changes afterwards.
//!
//! The store never reads the catalog. Views look items up here and hand them to
//! store operations.
//!
//! # Modules
//!
//! - [`search`]: The shared search predicate, result caps and de-duplication
//!
//! # TOML Format
//!
//! ```toml
//! [featured]
//! id = "featured-1"
//! title = "The Crown"
//! kind = "series"
//! year = 2024
//! maturity_rating = "TV-MA"
//!
//! [[rows]]
//! id = "trending"
//! title = "Trending Now"
//!
//! [[rows.items]]
//! id = "t1"
//! title = "Oppenheimer"
//! kind = "movie"
//! year = 2023
//! maturity_rating = "PG-13"
//! genres = ["Biography", "Drama", "History"]
//! ```

pub mod search;

pub use search::{
    filter_content, full_results, highlight_ranges, matches_query, suggestions, unique_by_id,
    MIN_QUERY_CHARS, SUGGESTION_LIMIT,
};

use crate::domain::{Content, ContentId, ContentKind, MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILT_IN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// One horizontally scrolling row of content on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub title: String,
    /// Rows flagged as Top 10 render the item's rank next to each card.
    #[serde(default)]
    pub top_ten: bool,
    #[serde(default)]
    pub items: Vec<Content>,
}

/// A genre-filtered row on the Movies or TV Shows page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    pub title: &'static str,
    pub items: Vec<Content>,
}

/// Genre shelves on the Movies page: title and the genres any of which qualify.
const MOVIE_SHELVES: [(&str, &[&str]); 4] = [
    ("Action & Adventure", &["Action", "Adventure"]),
    ("Drama", &["Drama"]),
    ("Sci-Fi & Fantasy", &["Sci-Fi", "Fantasy"]),
    ("Thriller & Horror", &["Thriller", "Horror"]),
];

const TV_SHELVES: [(&str, &[&str]); 3] = [
    ("Drama", &["Drama"]),
    ("Sci-Fi & Fantasy", &["Sci-Fi", "Fantasy"]),
    ("Crime & Thriller", &["Crime", "Thriller"]),
];

/// Rows the movie collection is drawn from, in priority order. Rows not
/// listed follow in catalog order; Top 10 rows never contribute.
const MOVIE_SOURCE_ROWS: [&str; 5] = ["trending", "originals", "action", "scifi", "dramas"];

const TV_SOURCE_ROWS: [&str; 4] = ["originals", "trending", "scifi", "dramas"];

/// The whole content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Item promoted in the hero banner.
    pub featured: Content,
    /// Home page rows in display order.
    #[serde(default)]
    pub rows: Vec<CategoryRow>,
}

impl Catalog {
    /// Loads the catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails to parse or validate.
    pub fn built_in() -> Result<Self> {
        Self::from_toml_str(BUILT_IN_CATALOG)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid catalog
    /// document, or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("catalog_from_file", path = %path.display()).entered();

        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a catalog TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Toml`] on malformed input and
    /// [`MarqueeError::Catalog`] if validation fails.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(contents)?;
        catalog.validate()?;

        tracing::debug!(
            rows = catalog.rows.len(),
            items = catalog.all_content().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Checks that row ids are unique and no id repeats within a row.
    ///
    /// The same id may appear in several rows; search results de-duplicate
    /// across rows.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Catalog`] describing the first violation.
    pub fn validate(&self) -> Result<()> {
        let mut row_ids = HashSet::new();
        for row in &self.rows {
            if !row_ids.insert(row.id.as_str()) {
                return Err(MarqueeError::Catalog(format!("duplicate row id: {}", row.id)));
            }

            let mut item_ids = HashSet::new();
            for item in &row.items {
                if !item_ids.insert(&item.id) {
                    return Err(MarqueeError::Catalog(format!(
                        "duplicate content id {} in row {}",
                        item.id, row.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Every row's items concatenated in row order. May repeat ids across rows.
    #[must_use]
    pub fn all_content(&self) -> Vec<Content> {
        self.rows.iter().flat_map(|row| row.items.iter().cloned()).collect()
    }

    #[must_use]
    pub fn row(&self, id: &str) -> Option<&CategoryRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Looks an item up by id, including the featured item.
    #[must_use]
    pub fn find(&self, id: &ContentId) -> Option<&Content> {
        if &self.featured.id == id {
            return Some(&self.featured);
        }
        self.rows
            .iter()
            .flat_map(|row| row.items.iter())
            .find(|item| &item.id == id)
    }

    /// Movies outside the Top 10, first occurrence of each id kept.
    #[must_use]
    pub fn movies(&self) -> Vec<Content> {
        self.of_kind(ContentKind::Movie, &MOVIE_SOURCE_ROWS)
    }

    /// Series outside the Top 10, first occurrence of each id kept.
    #[must_use]
    pub fn tv_shows(&self) -> Vec<Content> {
        self.of_kind(ContentKind::Series, &TV_SOURCE_ROWS)
    }

    #[must_use]
    pub fn movie_shelves(&self) -> Vec<Shelf> {
        build_shelves(&self.movies(), &MOVIE_SHELVES)
    }

    #[must_use]
    pub fn tv_shelves(&self) -> Vec<Shelf> {
        build_shelves(&self.tv_shows(), &TV_SHELVES)
    }

    /// Up to `limit` other items sharing at least one genre with `item`, in catalog order.
    #[must_use]
    pub fn similar_to(&self, item: &Content, limit: usize) -> Vec<Content> {
        let candidates = self
            .all_content()
            .into_iter()
            .filter(|other| other.id != item.id)
            .filter(|other| item.genres.iter().any(|genre| other.has_genre(genre)));
        unique_by_id(candidates).into_iter().take(limit).collect()
    }

    fn of_kind(&self, kind: ContentKind, order: &[&str]) -> Vec<Content> {
        let listed = order.iter().filter_map(|id| self.row(id));
        let unlisted = self.rows.iter().filter(|row| !order.contains(&row.id.as_str()));

        let items = listed
            .chain(unlisted)
            .filter(|row| !row.top_ten)
            .flat_map(|row| row.items.iter())
            .filter(|item| item.kind == kind)
            .cloned();
        unique_by_id(items)
    }
}

fn build_shelves(items: &[Content], layout: &[(&'static str, &[&str])]) -> Vec<Shelf> {
    layout.iter()
        .map(|&(title, genres)| Shelf {
            title,
            items: items
                .iter()
                .filter(|item| genres.iter().any(|genre| item.has_genre(genre)))
                .cloned()
                .collect(),
        })
        .collect()
}
