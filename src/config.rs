//! Front-end configuration loaded from TOML.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for the terminal front-end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Columns between the display borders.
    pub display_width: usize,
    /// Print the keypad before reading interactive input.
    pub show_keypad: bool,
    /// Prompt printed before each interactive line.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_width: 24,
            show_keypad: false,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/deskcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deskcalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the default location is
    /// tried, and a missing file there yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
