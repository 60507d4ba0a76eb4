//! Local state of the navbar search bar.
//!
//! While the user types, the search bar keeps its own text, the live
//! suggestions for that text, and which suggestion is highlighted. None of this
//! reaches the session store until the query is submitted; the store only
//! tracks whether search is active and the committed query.

use crate::catalog::search;
use crate::domain::Content;

/// Typed text, live suggestions, and the highlighted suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    text: String,
    suggestions: Vec<Content>,
    /// `None` means no suggestion is highlighted.
    highlighted: Option<usize>,
}

impl SearchBar {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Content] {
        &self.suggestions
    }

    #[must_use]
    pub const fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// The suggestion under the highlight, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&Content> {
        self.highlighted.and_then(|i| self.suggestions.get(i))
    }

    /// Replaces the typed text and recomputes suggestions from `corpus`.
    pub fn set_text(&mut self, text: impl Into<String>, corpus: &[Content]) {
        self.text = text.into();
        self.suggestions = search::suggestions(&self.text, corpus);

        if self
            .highlighted
            .is_some_and(|i| i >= self.suggestions.len())
        {
            self.highlighted = self.suggestions.len().checked_sub(1);
        }

        tracing::trace!(
            text = %self.text,
            suggestions = self.suggestions.len(),
            "search bar text updated"
        );
    }

    /// Moves the highlight down, stopping at the last suggestion.
    pub fn highlight_next(&mut self) {
        let Some(last) = self.suggestions.len().checked_sub(1) else {
            return;
        };
        self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(last)));
    }

    /// Moves the highlight up; moving above the first suggestion clears it.
    pub fn highlight_previous(&mut self) {
        self.highlighted = match self.highlighted {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Hides the dropdown but keeps the typed text.
    pub fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
    }

    /// Clears text, suggestions, and highlight.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
