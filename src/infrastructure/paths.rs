//! Path handling for user-supplied configuration.
//!
//! Config values may use `~` for the home directory. The default config file
//! follows the XDG base directory convention.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to `home`.
///
/// Paths without a leading `~`, or with no known home, are returned as-is.
///
/// # Examples
///
/// ```
/// use marquee::infrastructure::expand_tilde;
/// use std::path::{Path, PathBuf};
///
/// let home = Some(Path::new("/home/ada"));
/// assert_eq!(expand_tilde("~/themes/x.toml", home), PathBuf::from("/home/ada/themes/x.toml"));
/// assert_eq!(expand_tilde("~", home), PathBuf::from("/home/ada"));
/// assert_eq!(expand_tilde("/etc/x.toml", home), PathBuf::from("/etc/x.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with('/') => {
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}

/// `$HOME`, if set and non-empty.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// First existing config file: `$XDG_CONFIG_HOME/marquee/config.toml`,
/// then `~/.config/marquee/config.toml`.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    let xdg = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);
    let home_config = home_dir().map(|home| home.join(".config"));

    config_candidates(xdg.as_deref(), home_config.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_file())
}

fn config_candidates(xdg: Option<&Path>, home_config: Option<&Path>) -> Vec<PathBuf> {
    [xdg, home_config]
        .into_iter()
        .flatten()
        .map(|dir| dir.join("marquee").join("config.toml"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_needs_a_home() {
        assert_eq!(expand_tilde("~/x", None), PathBuf::from("~/x"));
        assert_eq!(
            expand_tilde("~other/x", Some(Path::new("/h"))),
            PathBuf::from("~other/x")
        );
    }

    #[test]
    fn xdg_comes_before_home() {
        let candidates = config_candidates(Some(Path::new("/xdg")), Some(Path::new("/h/.config")));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/xdg/marquee/config.toml"),
                PathBuf::from("/h/.config/marquee/config.toml"),
            ]
        );
        assert!(config_candidates(None, None).is_empty());
    }
}
