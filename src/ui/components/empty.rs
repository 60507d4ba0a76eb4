//! Empty state component renderer.

use crate::ui::helpers::centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Appends a centered two-line message.
///
/// ```text
///
///                  Your list is empty
///    Add shows and movies to keep track of what you want to watch.
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&centered(&empty.message, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&centered(&empty.subtitle, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
