//! Top-level rendering coordinator.
//!
//! Rendering is two steps:
//!
//! 1. **View model computation**: [`Session::compute_viewmodel`] turns the
//!    store snapshot and view state into a [`PageViewModel`]
//! 2. **Component rendering**: [`components::render_page`] lays the page out
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{AppContext, Session, Store};
//! use marquee::catalog::Catalog;
//! use marquee::ui::{render_to_string, Theme};
//!
//! let session = Session::new(
//!     AppContext::with_store(Store::default()),
//!     Catalog::built_in()?,
//!     Theme::default(),
//!     100,
//! );
//! let page = render_to_string(&session)?;
//! assert!(page.contains("MARQUEE"));
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use crate::app::Session;
use crate::domain::Result;
use crate::ui::components;
use crate::ui::viewmodel::PageViewModel;
use std::io::Write;

/// Clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the current page of `session` into a string.
///
/// # Errors
///
/// Returns [`MarqueeError::UninitializedContext`](crate::MarqueeError::UninitializedContext)
/// if the session has no store.
pub fn render_to_string(session: &Session) -> Result<String> {
    let viewmodel = session.compute_viewmodel()?;
    Ok(render_viewmodel(&viewmodel, session))
}

/// Renders the current page to stdout, replacing the previous frame.
///
/// # Errors
///
/// Fails if the view model cannot be computed or stdout cannot be written.
pub fn render(session: &Session) -> Result<()> {
    let page = render_to_string(session)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(CLEAR_SCREEN.as_bytes())?;
    handle.write_all(page.as_bytes())?;
    handle.flush()?;
    Ok(())
}

fn render_viewmodel(vm: &PageViewModel, session: &Session) -> String {
    let _span = tracing::trace_span!("render_viewmodel", route = %session.route).entered();
    components::render_page(vm, &session.theme, session.width)
}
