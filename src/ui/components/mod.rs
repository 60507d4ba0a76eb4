//! Composable UI component renderers.
//!
//! Each component appends whole lines to a shared `String` buffer, so a page
//! can be rendered, inspected in tests, and printed in one write.
//!
//! # Components
//!
//! - [`navbar`]: Logo, page links, list count, profile
//! - [`search`]: Search input box and suggestion dropdown
//! - [`hero`]: Featured item banner
//! - [`row`]: Scrolling category rows and card grids
//! - [`modal`]: Detail overlay
//! - [`empty`]: Empty page message
//!
//! # Layout
//!
//! ```text
//! [Navbar]
//! [Border]
//! [Search bar + dropdown]   (while search is active)
//! [Hero]                    (home only)
//! [Heading]                 (other pages)
//! [Grid]                    (list, results, featured series)
//! [Rows | Empty state]
//! [Modal]                   (while open)
//! ```

pub mod empty;
pub mod hero;
pub mod modal;
pub mod navbar;
pub mod row;
pub mod search;

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PageViewModel;

/// Renders a full page into a string.
#[must_use]
pub fn render_page(vm: &PageViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    navbar::render_navbar(&mut out, &vm.navbar, theme, cols);

    if let Some(search) = &vm.search_bar {
        search::render_search_bar(&mut out, search, theme, cols);
    }

    if let Some(hero) = &vm.hero {
        hero::render_hero(&mut out, hero, theme, cols);
    }

    if let Some(heading) = &vm.heading {
        out.push('\n');
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.header_fg));
        out.push_str(&truncate(heading, cols));
        out.push_str(Theme::reset());
        out.push_str("\n\n");
    }

    if !vm.grid.is_empty() {
        row::render_grid(&mut out, &vm.grid, theme, cols);
    }

    for row_view in &vm.rows {
        row::render_row(&mut out, row_view, theme, cols);
    }

    if let Some(empty_state) = &vm.empty_state {
        empty::render_empty_state(&mut out, empty_state, theme, cols);
    }

    if let Some(modal_info) = &vm.modal {
        out.push('\n');
        modal::render_modal(&mut out, modal_info, theme, cols);
    }

    out
}
