//! Marquee: a streaming-catalog browsing session for the terminal.
//!
//! Marquee models the client-side state of a video streaming front end:
//! - A single session store holding the user, the personal list, search
//!   state, the detail modal, and navbar/mute flags
//! - Pure reducer transitions behind named store operations
//! - Case-insensitive title/genre search with capped live suggestions
//! - Horizontally scrolling category rows with arrow affordances
//! - A line-driven terminal front end that renders each page with ANSI styling

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line driver (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Store + reducer                                  │  ← Shared state
//! │  - Event handling                                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────┐                      ┌───────────────┐
//! │ UI Layer      │                      │ Catalog       │
//! │ (ui/)         │                      │ (catalog/)    │
//! │ - Rendering   │                      │ - TOML data   │
//! │ - Theming     │                      │ - Search      │
//! │ - Row scroll  │                      │ - Shelves     │
//! └───────────────┘                      └───────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Content, User, errors (domain/)                  │
//! │  - Config paths (infrastructure/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/marquee/config.toml
//! theme = "marquee-light"
//! catalog_file = "~/catalogs/weekend.toml"
//! trace_level = "debug"
//! width = 120
//! ```
//!
//! # Example
//!
//! ```rust
//! use marquee::{handle_event, initialize, Config, Event};
//!
//! let mut session = initialize(&Config::default())?;
//!
//! for event in [Event::OpenSearch, Event::TypeText("dune".into()), Event::SubmitSearch] {
//!     let (_needs_render, actions) = handle_event(&mut session, &event)?;
//!     for action in actions {
//!         if let marquee::Action::Navigate(route) = action {
//!             session.navigate(route);
//!         }
//!     }
//! }
//! assert_eq!(session.context.store()?.state().search_query, "dune");
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, reduce, Action, AppContext, Event, Operation, Route, Session, SessionState,
    Store,
};
pub use catalog::Catalog;
pub use domain::{Content, ContentId, ContentKind, MarqueeError, Result, User};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Terminal width used when none is configured.
pub const DEFAULT_WIDTH: usize = 100;

/// Session configuration.
///
/// Read from a TOML file or a string map; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    ///
    /// Options: `marquee-dark`, `marquee-light`.
    #[serde(alias = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` expands to `$HOME`.
    pub theme_file: Option<String>,

    /// Path to a catalog TOML file replacing the built-in catalog.
    pub catalog_file: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`, or any `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Terminal width in columns. Default: 100
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            catalog_file: None,
            trace_level: None,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`: String → `theme_name`
    /// - `theme_file`, `catalog_file`, `trace_level`: copied as-is
    /// - `width`: String → `usize` (falls back to 100 on parse error or zero)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use marquee::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "marquee-light".to_string());
    /// map.insert("width".to_string(), "wide".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("marquee-light"));
    /// assert_eq!(config.width, 100);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let width = config
            .get("width")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_WIDTH);

        let non_empty = |key: &str| config.get(key).filter(|v| !v.trim().is_empty()).cloned();

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            catalog_file: non_empty("catalog_file"),
            trace_level: non_empty("trace_level"),
            width,
        }
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, has
    /// unknown keys, or sets `width = 0`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("config_from_file", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        if config.width == 0 {
            return Err(MarqueeError::Config("width must be positive".to_string()));
        }
        Ok(config)
    }
}

/// Creates a ready-to-use session.
///
/// - Theme: `theme_file`, else `theme_name`, else the default. A theme that
///   fails to load falls back to the default.
/// - Catalog: `catalog_file` if set, else the built-in catalog.
/// - Store: default state, provided through a fresh [`AppContext`].
///
/// # Errors
///
/// Returns an error if `catalog_file` is set but cannot be loaded or fails
/// validation.
///
/// # Example
///
/// ```rust
/// use marquee::{initialize, Config};
///
/// let session = initialize(&Config::default())?;
/// assert!(session.context.store()?.state().is_muted);
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Session> {
    tracing::debug!("initializing marquee session");

    let home = infrastructure::paths::home_dir();

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file, home.as_deref());
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let catalog = match &config.catalog_file {
        Some(file) => Catalog::from_file(infrastructure::expand_tilde(file, home.as_deref()))?,
        None => Catalog::built_in()?,
    };

    tracing::info!(
        theme = %theme.name,
        rows = catalog.rows.len(),
        width = config.width,
        "session initialized"
    );

    Ok(Session::new(
        AppContext::with_store(Store::default()),
        catalog,
        theme,
        config.width,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn map_keeps_defaults_for_missing_keys() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn map_rejects_zero_width() {
        let map = BTreeMap::from([("width".to_string(), "0".to_string())]);
        assert_eq!(Config::from_map(&map).width, DEFAULT_WIDTH);
    }

    #[test]
    fn file_accepts_theme_alias() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"marquee-light\"\nwidth = 120").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("marquee-light"));
        assert_eq!(config.width, 120);
    }

    #[test]
    fn file_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"red\"").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(MarqueeError::Toml(_))
        ));
    }

    #[test]
    fn bad_theme_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/no/such/theme.toml".to_string()),
            ..Config::default()
        };
        let session = initialize(&config).unwrap();
        assert_eq!(session.theme, Theme::default());
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = Config {
            catalog_file: Some("/no/such/catalog.toml".to_string()),
            ..Config::default()
        };
        assert!(initialize(&config).is_err());
    }
}
