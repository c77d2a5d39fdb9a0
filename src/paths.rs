//! XDG-style path utilities for configuration, cache and data directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "pons-cli";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/pons-cli` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/pons-cli` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the cache directory holding raw API responses.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/pons-cli` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/pons-cli` otherwise
pub fn cache_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CACHE_HOME", &[".cache"])
}

/// Returns the data directory holding the search history database and the
/// line editor history.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/pons-cli` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/pons-cli` otherwise
pub fn data_dir() -> Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_dir(var: &str, fallback: &[&str]) -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var(var)
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let mut dir = dirs::home_dir().context("Failed to determine home directory")?;
    dir.extend(fallback);
    Ok(dir.join(APP_DIR))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_var<F: FnOnce()>(var: &str, value: Option<&str>, f: F) {
        let original = std::env::var(var).ok();
        match value {
            Some(v) => unsafe { std::env::set_var(var, v) },
            None => unsafe { std::env::remove_var(var) },
        }

        f();

        // Restore
        match original {
            Some(v) => unsafe { std::env::set_var(var, v) },
            None => unsafe { std::env::remove_var(var) },
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_var("XDG_CONFIG_HOME", None, || {
            assert!(config_dir().unwrap().ends_with(".config/pons-cli"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_var("XDG_CONFIG_HOME", Some("/custom/config"), || {
            assert_eq!(
                config_dir().unwrap(),
                PathBuf::from("/custom/config/pons-cli")
            );
        });
    }

    #[test]
    #[serial]
    fn test_cache_dir_xdg_override() {
        with_var("XDG_CACHE_HOME", Some("/custom/cache"), || {
            assert_eq!(
                cache_dir().unwrap(),
                PathBuf::from("/custom/cache/pons-cli")
            );
        });
    }

    #[test]
    #[serial]
    fn test_data_dir_default() {
        with_var("XDG_DATA_HOME", None, || {
            assert!(data_dir().unwrap().ends_with(".local/share/pons-cli"));
        });
    }

    #[test]
    #[serial]
    fn test_empty_xdg_var_falls_back_to_home() {
        with_var("XDG_CACHE_HOME", Some(""), || {
            assert!(cache_dir().unwrap().ends_with(".cache/pons-cli"));
        });
    }
}
