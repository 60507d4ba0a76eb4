//! Catalog content model.
//!
//! A [`Content`] is one movie or series as supplied by the catalog. The store never
//! inspects content beyond its identifier; the view layer reads the descriptive
//! fields for rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a catalog entry.
///
/// Identifiers are unique within any collection the store reasons about, which is
/// what makes list membership checks by id sound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Whether an entry is a single film or an episodic show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => f.write_str("movie"),
            Self::Series => f.write_str("series"),
        }
    }
}

/// A catalog entry (movie or series) with descriptive metadata and media references.
///
/// # Fields
///
/// - `id`: Unique identifier
/// - `kind`: Movie or series
/// - `maturity_rating`: Rating label such as `TV-MA` or `PG-13`
/// - `poster` / `backdrop` / `trailer`: Media URLs
/// - `rank`: Position within a Top 10 row, if the entry appears in one
/// - `seasons`, `duration`, `rating`: Optional display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub kind: ContentKind,
    pub year: u16,
    #[serde(default)]
    pub maturity_rating: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub backdrop: String,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rank: Option<u8>,
    #[serde(default)]
    pub seasons: Option<u8>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl Content {
    /// Creates an entry with the required fields and empty media references.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::domain::{Content, ContentKind};
    ///
    /// let dune = Content::new("sf1", "Dune", ContentKind::Movie, 2021)
    ///     .with_genres(["Action", "Adventure", "Drama"]);
    /// assert_eq!(dune.id.as_str(), "sf1");
    /// assert!(dune.has_genre("drama"));
    /// ```
    #[must_use]
    pub fn new(id: impl Into<ContentId>, title: impl Into<String>, kind: ContentKind, year: u16) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            year,
            maturity_rating: String::new(),
            genres: Vec::new(),
            poster: String::new(),
            backdrop: String::new(),
            trailer: None,
            description: String::new(),
            rank: None,
            seasons: None,
            duration: None,
            rating: None,
        }
    }

    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the entry carries the genre, compared case-insensitively.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }

    #[must_use]
    pub fn is_movie(&self) -> bool {
        self.kind == ContentKind::Movie
    }

    /// Label shown under the title: duration for movies, season count for series.
    #[must_use]
    pub fn runtime_label(&self) -> String {
        if let Some(duration) = &self.duration {
            return duration.clone();
        }
        match (self.kind, self.seasons) {
            (ContentKind::Series, Some(1)) => "1 Season".to_string(),
            (ContentKind::Series, Some(n)) => format!("{n} Seasons"),
            _ => String::new(),
        }
    }
}
