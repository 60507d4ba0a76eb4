//! Horizontal row scrolling: arrow affordances and offset stepping.
//!
//! Each category row is a horizontally scrollable strip of cards. Whether the
//! left/right arrows are shown depends only on the strip's current offset,
//! its total scrollable width, and the visible width. Arrow clicks move the
//! offset by a fixed step, clamped to the scrollable range.
//!
//! All measurements are in pixels of the virtual strip. The terminal renderer
//! maps them to card indices with [`CARD_STRIDE_PX`].
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::scroll::ScrollAffordance;
//!
//! let at_start = ScrollAffordance::compute(0.0, 1000.0, 500.0);
//! assert!(!at_start.can_scroll_left);
//! assert!(at_start.can_scroll_right);
//!
//! let at_end = ScrollAffordance::compute(500.0, 1000.0, 500.0);
//! assert!(at_end.can_scroll_left);
//! assert!(!at_end.can_scroll_right);
//! ```

/// Slack at the right edge below which the strip counts as fully scrolled.
pub const SCROLL_EPSILON: f64 = 10.0;

/// Distance moved by one arrow click.
pub const ROW_SCROLL_STEP: f64 = 800.0;

/// Width of one card plus the gap after it.
pub const CARD_STRIDE_PX: f64 = 248.0;

/// Which navigation arrows a row should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollAffordance {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollAffordance {
    /// Computes arrow visibility from the current scroll geometry.
    ///
    /// `can_scroll_left` is `offset > 0`; `can_scroll_right` is
    /// `offset < total - visible - SCROLL_EPSILON`.
    #[must_use]
    pub fn compute(offset: f64, total: f64, visible: f64) -> Self {
        Self {
            can_scroll_left: offset > 0.0,
            can_scroll_right: offset < total - visible - SCROLL_EPSILON,
        }
    }
}

/// Scroll position of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowScroll {
    offset: f64,
}

impl RowScroll {
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Moves one step left, stopping at the start.
    pub fn scroll_left(&mut self) {
        self.offset = (self.offset - ROW_SCROLL_STEP).max(0.0);
    }

    /// Moves one step right, stopping where the last card is flush with the edge.
    pub fn scroll_right(&mut self, total: f64, visible: f64) {
        let max_offset = (total - visible).max(0.0);
        self.offset = (self.offset + ROW_SCROLL_STEP).min(max_offset);
    }

    /// Pulls the offset back inside the scrollable range, e.g. after the viewport grew.
    pub fn clamp(&mut self, total: f64, visible: f64) {
        self.offset = self.offset.min((total - visible).max(0.0));
    }

    #[must_use]
    pub fn affordance(&self, total: f64, visible: f64) -> ScrollAffordance {
        ScrollAffordance::compute(self.offset, total, visible)
    }

    /// Index of the first card at least partly visible.
    #[must_use]
    pub fn first_visible_card(&self) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (self.offset / CARD_STRIDE_PX).floor() as usize;
        index
    }
}

/// Total scrollable width of a row holding `cards` cards.
#[must_use]
pub fn strip_width(cards: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let count = cards as f64;
    count * CARD_STRIDE_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_edge_respects_epsilon() {
        let near_end = ScrollAffordance::compute(495.0, 1000.0, 500.0);
        assert!(!near_end.can_scroll_right);

        let before_slack = ScrollAffordance::compute(489.0, 1000.0, 500.0);
        assert!(before_slack.can_scroll_right);
    }

    #[test]
    fn content_narrower_than_viewport_never_scrolls() {
        let affordance = ScrollAffordance::compute(0.0, 300.0, 500.0);
        assert_eq!(affordance, ScrollAffordance::default());
    }

    #[test]
    fn row_scroll_clamps_at_both_ends() {
        let total = 2000.0;
        let visible = 600.0;
        let mut row = RowScroll::default();

        row.scroll_left();
        assert!(row.offset().abs() < f64::EPSILON);

        row.scroll_right(total, visible);
        assert!((row.offset() - 800.0).abs() < f64::EPSILON);

        row.scroll_right(total, visible);
        assert!((row.offset() - 1400.0).abs() < f64::EPSILON);
        assert!(!row.affordance(total, visible).can_scroll_right);

        row.scroll_left();
        assert!((row.offset() - 600.0).abs() < f64::EPSILON);
        assert!(row.affordance(total, visible).can_scroll_left);
    }

    #[test]
    fn clamp_follows_a_wider_viewport() {
        let mut row = RowScroll::default();
        row.scroll_right(2000.0, 600.0);
        row.scroll_right(2000.0, 600.0);

        row.clamp(2000.0, 1500.0);
        assert!((row.offset() - 500.0).abs() < f64::EPSILON);
        assert!(!row.affordance(2000.0, 1500.0).can_scroll_right);

        row.clamp(2000.0, 2500.0);
        assert!(row.offset().abs() < f64::EPSILON);
        assert_eq!(row.affordance(2000.0, 2500.0), ScrollAffordance::default());
    }

    #[test]
    fn first_visible_card_follows_offset() {
        let mut row = RowScroll::default();
        assert_eq!(row.first_visible_card(), 0);
        row.scroll_right(strip_width(20), 500.0);
        assert_eq!(row.first_visible_card(), 3);
    }
}
