//! Navbar component renderer.
//!
//! One line: logo, page links with the active page emphasized, list count,
//! then the mute indicator and profile name on the right. Once the page has
//! scrolled past the threshold the line gets a solid background.

use crate::ui::helpers::{self, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavbarInfo;

const LOGO: &str = "MARQUEE";
const LINKS: &[&str] = &["Home", "TV Shows", "Movies", "My List"];

/// Appends the navbar line followed by a border.
pub fn render_navbar(out: &mut String, navbar: &NavbarInfo, theme: &Theme, cols: usize) {
    let solid_bg = navbar
        .is_scrolled
        .then_some(theme.colors.navbar_scrolled_bg.as_deref())
        .flatten();
    let restore_bg = || solid_bg.map(Theme::bg).unwrap_or_default();

    out.push_str(&restore_bg());
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(LOGO);
    out.push_str(Theme::reset());
    out.push_str(&restore_bg());

    let mut used = text_width(LOGO);
    for link in LINKS {
        let label = if *link == "My List" && navbar.list_count > 0 {
            format!("{link} ({})", navbar.list_count)
        } else {
            (*link).to_string()
        };

        out.push_str("  ");
        if *link == navbar.page_title {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.header_fg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&label);
        out.push_str(Theme::reset());
        out.push_str(&restore_bg());
        used += 2 + text_width(&label);
    }

    let sound = if navbar.is_muted { "🔇" } else { "🔊" };
    let profile = format!("{sound}  ⌕  {}", navbar.user_name);
    let gap = cols.saturating_sub(used + text_width(&profile)).max(1);
    out.push_str(&" ".repeat(gap));
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&profile);
    out.push_str(Theme::reset());
    out.push('\n');

    helpers::render_border(out, &theme.colors.border, cols);
}
