//! Persisted user preferences.
//!
//! Only one preference exists: the display theme. It lives in a small TOML
//! file under the user config directory and is read once at startup. A
//! missing or malformed file falls back to the default theme rather than
//! failing; the theme is cosmetic and never affects calculation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display theme identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Light,
    Solarized,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    theme: Theme,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tapecalc").join("config.toml"))
}

/// Load the persisted theme, falling back to the default.
pub fn load_theme() -> Theme {
    match config_path() {
        Some(path) => load_from(&path),
        None => Theme::default(),
    }
}

fn load_from(path: &Path) -> Theme {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Theme::default(),
    };
    match toml::from_str::<Config>(&raw) {
        Ok(config) => config.theme,
        Err(err) => {
            debug!(%err, path = %path.display(), "ignoring malformed config");
            Theme::default()
        }
    }
}

/// Persist the theme choice.
pub fn save_theme(theme: Theme) -> Result<()> {
    let path = config_path().context("no config directory available")?;
    save_to(&path, theme)
}

fn save_to(path: &Path, theme: Theme) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let body = toml::to_string_pretty(&Config { theme }).context("failed to serialize config")?;
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        save_to(&path, Theme::Dark).unwrap();
        assert_eq!(load_from(&path), Theme::Dark);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(&dir.path().join("config.toml")), Theme::Default);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"neon\"\n").unwrap();
        assert_eq!(load_from(&path), Theme::Default);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not toml at all [").unwrap();
        assert_eq!(load_from(&path), Theme::Default);
    }
}
