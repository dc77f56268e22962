//! Shell settings
//!
//! Read from an optional JSON file. Gameplay constants are deliberately not
//! here; only where to find things and how the shell runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file name
pub const SETTINGS_FILE: &str = "space_shooter.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Shell settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the sprite PNGs
    pub asset_dir: PathBuf,
    /// RNG seed; a time-derived one is used when absent
    pub seed: Option<u64>,
    /// Ticks the headless shell runs before exiting
    pub demo_ticks: u32,
    /// Where to write the last composed frame, if anywhere
    pub snapshot_path: Option<PathBuf>,
    /// Pace ticks at the fixed rate instead of running flat out
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("resources"),
            seed: None,
            demo_ticks: 600,
            snapshot_path: None,
            realtime: false,
        }
    }
}

impl Settings {
    /// Parse settings from `path`
    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
