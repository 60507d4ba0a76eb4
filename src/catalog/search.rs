//! Catalog search: one predicate, two result caps.
//!
//! The live suggestion list under the search bar and the full results page share
//! the same routine, [`filter_content`]. They differ only in the result cap and
//! in where they are shown. Neither ranks results; input order is preserved.
//!
//! # Matching
//!
//! An item matches when its title, or any of its genres, contains the query
//! case-insensitively. The empty query matches everything.
//!
//! # Example
//!
//! ```rust
//! use marquee::catalog::filter_content;
//! use marquee::domain::{Content, ContentKind};
//!
//! let items = vec![
//!     Content::new("t1", "Oppenheimer", ContentKind::Movie, 2023),
//!     Content::new("t2", "Wednesday", ContentKind::Series, 2023).with_genres(["Mystery"]),
//! ];
//!
//! let hits = filter_content("MYST", &items, None);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Wednesday");
//! ```

use crate::domain::Content;
use std::collections::HashSet;

/// Maximum number of live suggestions shown while typing.
pub const SUGGESTION_LIMIT: usize = 6;

/// Suggestions and the results page stay empty below this many characters.
pub const MIN_QUERY_CHARS: usize = 2;

/// Returns `true` if the title or any genre contains `query`, ignoring case.
#[must_use]
pub fn matches_query(item: &Content, query: &str) -> bool {
    let needle = fold_case(query);
    contains_folded(&item.title, &needle)
        || item.genres.iter().any(|genre| contains_folded(genre, &needle))
}

/// Lowercases char by char, so every folded char maps back to one source char.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_case(haystack).contains(folded_needle)
}

/// Filters `items` by [`matches_query`], preserving order.
///
/// When `limit` is `Some(n)`, at most `n` items are returned.
#[must_use]
pub fn filter_content(query: &str, items: &[Content], limit: Option<usize>) -> Vec<Content> {
    let _span = tracing::debug_span!("filter_content",
        query = %query,
        candidates = items.len(),
        limit = ?limit
    ).entered();

    let matching = items.iter().filter(|item| matches_query(item, query)).cloned();
    let results: Vec<Content> = match limit {
        Some(cap) => matching.take(cap).collect(),
        None => matching.collect(),
    };

    tracing::debug!(result_count = results.len(), "search filter applied");
    results
}

/// Keeps the first occurrence of every id, preserving order.
#[must_use]
pub fn unique_by_id<I>(items: I) -> Vec<Content>
where
    I: IntoIterator<Item = Content>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

fn long_enough(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

/// Live suggestions for text being typed into the search bar.
///
/// Empty until the text reaches [`MIN_QUERY_CHARS`]; capped at
/// [`SUGGESTION_LIMIT`].
#[must_use]
pub fn suggestions(query: &str, corpus: &[Content]) -> Vec<Content> {
    if !long_enough(query) {
        return Vec::new();
    }
    let unique = unique_by_id(corpus.iter().cloned());
    filter_content(query, &unique, Some(SUGGESTION_LIMIT))
}

/// Results for a committed query: uncapped and de-duplicated by id.
///
/// Empty until the query reaches [`MIN_QUERY_CHARS`].
#[must_use]
pub fn full_results(query: &str, corpus: &[Content]) -> Vec<Content> {
    if !long_enough(query) {
        return Vec::new();
    }
    unique_by_id(filter_content(query, corpus, None))
}

/// Character index ranges of every case-insensitive occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` with exclusive end, in char indices of `text`.
/// Matching uses the same case folding as [`matches_query`]; a char that
/// lowercases to several chars is highlighted whole. Adjacent occurrences are
/// merged into one range. Returns nothing for an empty query.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    // Folded chars paired with the index of the source char they came from.
    let haystack: Vec<(char, usize)> = text
        .chars()
        .enumerate()
        .flat_map(|(i, c)| c.to_lowercase().map(move |lower| (lower, i)))
        .collect();
    let needle: Vec<char> = fold_case(query).chars().collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= haystack.len() {
        let window = &haystack[pos..pos + needle.len()];
        let hit = window.iter().zip(&needle).all(|((a, _), b)| a == b);

        if hit {
            let start = window[0].1;
            let end = window[needle.len() - 1].1 + 1;
            match ranges.last_mut() {
                Some(last) if last.1 >= start => last.1 = last.1.max(end),
                _ => ranges.push((start, end)),
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}
