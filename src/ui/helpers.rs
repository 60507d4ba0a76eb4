//! Shared rendering utilities.
//!
//! Components write whole lines into a `String` buffer. These helpers handle
//! the parts every component needs: width-aware truncation, padding, and
//! match highlighting with correct ANSI reset handling.
//!
//! All widths are counted in `char`s, not bytes.
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::helpers::render_highlighted_text;
//! use marquee::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! render_highlighted_text(&mut out, "Dune", &[(0, 2)], &theme, false);
//! assert!(out.ends_with("ne"));
//! ```

use crate::ui::theme::Theme;

/// Number of display columns `text` takes, counted in chars.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` chars, ending with `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Left-aligns `text` in a field of `width` chars, truncating if needed.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text_width(&text));
    format!("{text}{}", " ".repeat(fill))
}

/// Centers `text` in a line of `cols` chars.
#[must_use]
pub fn centered(text: &str, cols: usize) -> String {
    let text = truncate(text, cols);
    let len = text_width(&text);
    let left = cols.saturating_sub(len) / 2;
    format!(
        "{}{text}{}",
        " ".repeat(left),
        " ".repeat(cols.saturating_sub(left + len))
    )
}

/// Appends a full-width horizontal rule.
pub fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends `text` with the given char ranges highlighted.
///
/// Ranges are `(start, end)` char indices, end exclusive, sorted and
/// non-overlapping. When `is_selected` is set the whole line already carries
/// selection colors, so highlighting is skipped.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}
