//! Category rows and card grids.
//!
//! A row is a title line followed by a strip of card columns with `‹`/`›`
//! markers where the strip can scroll. A grid wraps cards into as many
//! columns as fit the width.

use crate::ui::helpers::{pad_right, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardView, RowView};

/// Card column width including the gap after it.
pub const CARD_COLUMNS: usize = 31;

/// Cards drawn side by side in a row `cols` wide, after the two arrow gutters.
#[must_use]
pub fn cards_per_row(cols: usize) -> usize {
    (cols.saturating_sub(2) / CARD_COLUMNS).max(1)
}

/// Appends one horizontally scrolling row.
pub fn render_row(out: &mut String, row: &RowView, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&truncate(&row.title, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    let left = if row.show_left_arrow { "‹" } else { " " };
    let right = if row.show_right_arrow { "›" } else { " " };
    let inner = cols.saturating_sub(2);

    render_card_lines(out, &row.cards, theme, inner, Some((left, right)));
    out.push('\n');
}

/// Appends cards wrapped into lines of as many columns as fit.
pub fn render_grid(out: &mut String, cards: &[CardView], theme: &Theme, cols: usize) {
    let per_line = (cols / CARD_COLUMNS).max(1);
    for chunk in cards.chunks(per_line) {
        render_card_lines(out, chunk, theme, cols, None);
        out.push('\n');
    }
}

/// Renders a strip of cards as three text lines: title, meta, badges.
fn render_card_lines(
    out: &mut String,
    cards: &[CardView],
    theme: &Theme,
    width: usize,
    arrows: Option<(&str, &str)>,
) {
    let field = CARD_COLUMNS - 1;

    for line in 0..3 {
        if let Some((left, _)) = arrows {
            let marker = if line == 1 { left } else { " " };
            out.push_str(&Theme::fg(&theme.colors.accent));
            out.push_str(marker);
            out.push_str(Theme::reset());
        }

        for card in cards {
            if card.is_hovered {
                out.push_str(&Theme::fg(&theme.colors.selection_fg));
                out.push_str(&Theme::bg(&theme.colors.selection_bg));
            } else if line == 0 {
                out.push_str(&Theme::fg(&theme.colors.text_normal));
            } else {
                out.push_str(&Theme::fg(&theme.colors.text_dim));
            }

            let text = match line {
                0 => match card.rank {
                    Some(rank) => format!("{rank:>2} {}", card.title),
                    None => card.title.clone(),
                },
                1 => card.meta.clone(),
                _ => badge_line(card),
            };
            out.push_str(&pad_right(&text, field));
            out.push_str(Theme::reset());
            out.push(' ');
        }

        if let Some((_, right)) = arrows {
            let used = cards.len() * CARD_COLUMNS;
            out.push_str(&" ".repeat(width.saturating_sub(used)));
            let marker = if line == 1 { right } else { " " };
            out.push_str(&Theme::fg(&theme.colors.accent));
            out.push_str(marker);
            out.push_str(Theme::reset());
        }
        out.push('\n');
    }
}

/// Third card line: list badge, then genres while hovered.
fn badge_line(card: &CardView) -> String {
    let badge = if card.in_list { "✓ In My List" } else { "" };
    if card.is_hovered && !card.genres.is_empty() {
        if badge.is_empty() {
            return card.genres.clone();
        }
        return format!("{badge} · {}", card.genres);
    }
    badge.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> CardView {
        CardView {
            id: title.to_lowercase(),
            title: title.to_string(),
            rank: None,
            meta: "2021 · PG-13".to_string(),
            in_list: false,
            is_hovered: false,
            genres: "Drama • Sci-Fi".to_string(),
        }
    }

    #[test]
    fn genres_appear_only_on_hover() {
        let mut c = card("Dune");
        assert_eq!(badge_line(&c), "");

        c.is_hovered = true;
        assert_eq!(badge_line(&c), "Drama • Sci-Fi");

        c.in_list = true;
        assert_eq!(badge_line(&c), "✓ In My List · Drama • Sci-Fi");
    }

    #[test]
    fn grid_wraps_by_width() {
        let theme = Theme::default();
        let cards: Vec<_> = ["A", "B", "C"].into_iter().map(card).collect();
        let mut out = String::new();
        render_grid(&mut out, &cards, &theme, 70);

        // Two per line at 70 columns: two card blocks of three lines plus spacers.
        assert_eq!(out.lines().count(), 8);
    }

    #[test]
    fn arrows_follow_affordance() {
        let theme = Theme::default();
        let row = RowView {
            id: "trending".to_string(),
            title: "Trending Now".to_string(),
            cards: vec![card("Dark")],
            show_left_arrow: false,
            show_right_arrow: true,
        };
        let mut out = String::new();
        render_row(&mut out, &row, &theme, 80);

        assert!(out.contains('›'));
        assert!(!out.contains('‹'));
    }
}
