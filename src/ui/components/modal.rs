//! Detail overlay for a single item.
//!
//! Drawn as a bordered panel after the page body. The panel repeats the
//! item's metadata, description and genres, the list/mute buttons, and a
//! short "More Like This" list.

use crate::ui::helpers::{pad_right, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const MODAL_MARGIN: usize = 4;

/// Appends the modal panel.
pub fn render_modal(out: &mut String, modal: &ModalInfo, theme: &Theme, cols: usize) {
    let margin = " ".repeat(MODAL_MARGIN);
    let inner = cols.saturating_sub(MODAL_MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.border);

    out.push_str(&format!(
        "{margin}{border}╭{}╮{}\n",
        "─".repeat(inner.saturating_sub(2)),
        Theme::reset()
    ));

    let line = |out: &mut String, style: String, text: &str| {
        out.push_str(&margin);
        out.push_str(&border);
        out.push_str("│ ");
        out.push_str(Theme::reset());
        out.push_str(&style);
        out.push_str(&pad_right(text, inner.saturating_sub(3)));
        out.push_str(Theme::reset());
        out.push_str(&border);
        out.push('│');
        out.push_str(Theme::reset());
        out.push('\n');
    };

    let close = "✕";
    let title_width = inner.saturating_sub(3 + text_width(close) + 1);
    line(
        out,
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)),
        &format!("{} {close}", pad_right(&modal.title, title_width)),
    );
    line(out, Theme::fg(&theme.colors.text_dim), &modal.meta);
    line(out, String::new(), "");

    for chunk in wrap(&modal.description, inner.saturating_sub(3)) {
        line(out, Theme::fg(&theme.colors.text_normal), &chunk);
    }
    if !modal.genres.is_empty() {
        line(
            out,
            Theme::fg(&theme.colors.text_dim),
            &format!("Genres: {}", modal.genres),
        );
    }
    line(out, String::new(), "");

    let list_button = if modal.in_list { "✓ Remove from My List" } else { "+ Add to My List" };
    let sound = if modal.is_muted { "🔇 Unmute" } else { "🔊 Mute" };
    line(
        out,
        Theme::fg(&theme.colors.badge_fg),
        &format!("[▶ Play]  [{list_button}]  [{sound}]"),
    );

    if !modal.similar.is_empty() {
        line(out, String::new(), "");
        line(
            out,
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
            "More Like This",
        );
        for title in &modal.similar {
            line(out, Theme::fg(&theme.colors.text_normal), &format!("• {title}"));
        }
    }

    out.push_str(&format!(
        "{margin}{border}╰{}╯{}\n",
        "─".repeat(inner.saturating_sub(2)),
        Theme::reset()
    ));
}

/// Greedy word wrap at `width` chars.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            text_width(word)
        } else {
            text_width(&current) + 1 + text_width(word)
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&truncate(word, width));
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("the spice must flow", 10),
            vec!["the spice", "must flow"]
        );
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn renders_similar_titles() {
        let modal = ModalInfo {
            title: "Dune".to_string(),
            meta: "2021 · PG-13 · 2h 35m".to_string(),
            description: "A noble family becomes embroiled in a war.".to_string(),
            genres: "Sci-Fi, Adventure".to_string(),
            in_list: true,
            is_muted: true,
            similar: vec!["Interstellar".to_string()],
        };
        let mut out = String::new();
        render_modal(&mut out, &modal, &Theme::default(), 80);

        assert!(out.contains("Remove from My List"));
        assert!(out.contains("More Like This"));
        assert!(out.contains("• Interstellar"));
        assert!(out.contains("Unmute"));
    }
}
