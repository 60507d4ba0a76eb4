//! Color schemes and ANSI escape sequence generation.
//!
//! Themes are either built in (compiled from `themes/*.toml`) or loaded from a
//! user-supplied TOML file.
//!
//! # Built-in Themes
//!
//! - `marquee-dark`: Black background palette with a red accent (default)
//! - `marquee-light`: Light palette for bright terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! accent = "#e50914"
//! header_fg = "#ffffff"
//! navbar_scrolled_bg = "#141414"
//! text_normal = "#e5e5e5"
//! text_dim = "#808080"
//! border = "#333333"
//! selection_fg = "#141414"
//! selection_bg = "#e5e5e5"
//! match_highlight_fg = "#141414"
//! match_highlight_bg = "#f5c518"
//! badge_fg = "#46d369"
//! empty_state_fg = "#b3b3b3"
//! ```
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::theme::Theme;
//!
//! let theme = Theme::from_name("marquee-dark").unwrap();
//! println!("{}Title{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! ```

use crate::domain::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILT_IN_THEMES: &[&str] = &["marquee-dark", "marquee-light"];

/// Color scheme for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#e50914"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Brand color: logo, active route, modal title.
    pub accent: String,

    /// Navbar and heading text.
    pub header_fg: String,
    /// Navbar background once the page has scrolled.
    #[serde(default)]
    pub navbar_scrolled_bg: Option<String>,

    pub text_normal: String,
    /// Secondary text: metadata lines, subtitles.
    pub text_dim: String,

    pub border: String,

    /// Highlighted suggestion and hovered card.
    pub selection_fg: String,
    pub selection_bg: String,

    /// Matched characters in suggestion titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Rank and "in list" badges.
    pub badge_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for names not in [`BUILT_IN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "marquee-dark" => include_str!("../../themes/marquee-dark.toml"),
            "marquee-light" => include_str!("../../themes/marquee-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            MarqueeError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| MarqueeError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Falls back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `marquee-dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("marquee-dark").expect("built-in marquee-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_built_in_theme_parses() {
        for name in BUILT_IN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, *name);
        }
        assert!(Theme::from_name("nope").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#e50914"), "\u{001b}[38;2;229;9;20m");
        assert_eq!(Theme::bg("ffffff"), "\u{001b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("#abc"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../themes/marquee-light.toml").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "marquee-light");
    }

    #[test]
    fn bad_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        assert!(matches!(
            Theme::from_file(file.path()),
            Err(MarqueeError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(MarqueeError::Theme(_))
        ));
    }
}
