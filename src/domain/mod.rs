//! Domain layer for Marquee.
//!
//! Core types shared by the store, the catalog, and the view layer. Nothing here
//! depends on rendering or on how the catalog is loaded.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`content`]: Catalog entries and their identifiers
//! - [`user`]: The static display identity of the session

pub mod content;
pub mod error;
pub mod user;

pub use content::{Content, ContentId, ContentKind};
pub use error::{MarqueeError, Result};
pub use user::User;
