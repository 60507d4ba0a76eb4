//! Application layer coordinating session state, events, and actions.
//!
//! This module sits between the line driver (main.rs) and the
//! catalog/domain layers. Shared state lives in a single [`Store`] reached
//! through an [`AppContext`]; every change goes through the pure [`reduce`]
//! function.
//!
//! # Architecture
//!
//! ```text
//! Input → Events → Event Handler → Store operations → reduce → Subscribers
//!                        │
//!                        └──→ Actions (Navigate, Quit) → Driver
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Effects the handler hands back to the driver
//! - [`command`]: Driver line commands
//! - [`context`]: Scoped access to the store
//! - [`handler`]: Gesture processing
//! - [`modes`]: Page routes and card hover state
//! - [`reducer`]: Pure state transitions
//! - [`search_bar`]: Typed text, suggestions, highlight
//! - [`session`]: View state and view model computation
//! - [`state`]: The shared session snapshot
//! - [`store`]: Owner of the snapshot with named operations
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, AppContext, Event, Session, Store};
//! use marquee::catalog::Catalog;
//! use marquee::ui::Theme;
//!
//! let mut session = Session::new(
//!     AppContext::with_store(Store::default()),
//!     Catalog::built_in()?,
//!     Theme::default(),
//!     100,
//! );
//! handle_event(&mut session, &Event::AddToList("t1".into()))?;
//! assert_eq!(session.context.store()?.state().my_list.len(), 1);
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

pub mod actions;
pub mod command;
pub mod context;
pub mod handler;
pub mod modes;
pub mod reducer;
pub mod search_bar;
pub mod session;
pub mod state;
pub mod store;

pub use actions::Action;
pub use command::{parse_command, Command};
pub use context::AppContext;
pub use handler::{handle_event, Event};
pub use modes::{HoverState, Route};
pub use reducer::{reduce, Operation};
pub use search_bar::SearchBar;
pub use session::Session;
pub use state::SessionState;
pub use store::Store;
