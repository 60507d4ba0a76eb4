//! Search bar component renderer.
//!
//! Renders the expanded search input as a bordered box, followed by the
//! suggestion dropdown when there are suggestions.

use crate::ui::helpers::{self, pad_right, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, SuggestionItem};

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 2;

const PLACEHOLDER: &str = "Titles, genres";

/// Appends the 3-line search box and the dropdown beneath it.
///
/// ```text
///   ┌──────────────────────────┐
///   │ ⌕ dune                   │
///   └──────────────────────────┘
///    ▸ Dune          2021 · movie
/// ```
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.accent);

    out.push_str(&format!(
        "{margin}{border}┌{}┐{}\n",
        "─".repeat(inner_width),
        Theme::reset()
    ));

    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    if search.text.is_empty() {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&pad_right(&format!(" ⌕ {PLACEHOLDER}"), inner_width));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&pad_right(&format!(" ⌕ {}", search.text), inner_width));
    }
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&format!(
        "{margin}{border}└{}┘{}\n",
        "─".repeat(inner_width),
        Theme::reset()
    ));

    for item in &search.suggestions {
        render_suggestion(out, item, theme, inner_width);
    }
}

fn render_suggestion(out: &mut String, item: &SuggestionItem, theme: &Theme, width: usize) {
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN + 1));

    if item.is_highlighted {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
        out.push_str("▸ ");
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str("  ");
    }

    let meta_width = text_width(&item.meta);
    let title_width = width.saturating_sub(meta_width + 3);
    let title = helpers::truncate(&item.title, title_width);

    helpers::render_highlighted_text(
        out,
        &title,
        &item.highlight_ranges,
        theme,
        item.is_highlighted,
    );
    if !item.is_highlighted {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&" ".repeat(title_width.saturating_sub(text_width(&title)) + 1));

    if !item.is_highlighted {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&item.meta);
    out.push_str(Theme::reset());
    out.push('\n');
}
