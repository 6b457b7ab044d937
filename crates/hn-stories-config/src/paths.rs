//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hn-stories/`, `~/.cache/hn-stories/`
//! - macOS: `~/Library/Application Support/hn-stories/`, `~/Library/Caches/hn-stories/`
//! - Windows: `%APPDATA%\hn-stories\`, `%LOCALAPPDATA%\hn-stories\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "hn-stories";
const PREFERENCES_FILE: &str = "preferences.toml";

/// `<base>/hn-stories`, without touching the filesystem
fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    let base = base.with_context(|| format!("Could not determine {} directory", kind))?;
    Ok(base.join(APP_NAME))
}

fn ensure_dir(dir: PathBuf, kind: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {} directory {:?}", kind, dir))?;
    Ok(dir)
}

fn preferences_file(config_dir: &Path) -> PathBuf {
    config_dir.join(PREFERENCES_FILE)
}

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    ensure_dir(app_dir(dirs::config_dir(), "config")?, "config")
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    ensure_dir(app_dir(dirs::cache_dir(), "cache")?, "cache")
}

/// Get path to the preferences file
pub fn preferences_path() -> Result<PathBuf> {
    Ok(preferences_file(&config_dir()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_app_dir_is_namespaced_under_base() {
        let dir = app_dir(Some(PathBuf::from("/home/user/.config")), "config").unwrap();
        assert_eq!(dir, PathBuf::from("/home/user/.config/hn-stories"));
    }

    #[test]
    fn test_app_dir_without_base_is_an_error() {
        let err = app_dir(None, "cache").unwrap_err();
        assert!(err.to_string().contains("cache directory"));
    }

    #[test]
    fn test_preferences_file_lives_in_config_dir() {
        let dir = app_dir(Some(PathBuf::from("/base")), "config").unwrap();
        let path = preferences_file(&dir);
        assert_eq!(path, PathBuf::from("/base/hn-stories/preferences.toml"));
    }

    #[test]
    fn test_ensure_dir_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        assert_eq!(ensure_dir(dir.clone(), "config").unwrap(), dir);
        assert!(dir.is_dir());
    }
}
