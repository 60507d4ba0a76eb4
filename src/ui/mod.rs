//! Terminal rendering layer.
//!
//! ```text
//! Session → compute_viewmodel → PageViewModel → components → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready page data
//! - [`renderer`]: Rendering entry points
//! - [`components`]: Per-element renderers
//! - [`helpers`]: Padding, truncation, match highlighting
//! - [`scroll`]: Row scroll offsets and arrow affordances
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod scroll;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use scroll::{RowScroll, ScrollAffordance};
pub use theme::Theme;
pub use viewmodel::{CardView, EmptyState, PageViewModel, RowView};
