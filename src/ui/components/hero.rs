//! Hero banner for the featured item.

use crate::ui::helpers::{centered, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeroInfo;

/// Appends the featured title, its metadata, a description excerpt, and the
/// banner buttons.
pub fn render_hero(out: &mut String, hero: &HeroInfo, theme: &Theme, cols: usize) {
    out.push('\n');

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&centered(&hero.title.to_uppercase(), cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&centered(&hero.meta, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    if !hero.description.is_empty() {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&centered(&truncate(&hero.description, cols.saturating_sub(4)), cols));
        out.push_str(Theme::reset());
        out.push('\n');
    }

    let list_button = if hero.in_list { "✓ My List" } else { "+ My List" };
    let sound = if hero.is_muted { "🔇" } else { "🔊" };
    let buttons = format!("[▶ Play]  [ⓘ More Info]  [{list_button}]  {sound}");

    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&centered(&buttons, cols));
    out.push_str(Theme::reset());
    out.push_str("\n\n");
}
