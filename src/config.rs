//! Background configuration persistence
//!
//! Options are read from `~/.config/backdrop/config.yaml`, falling back to
//! `/etc/backdrop/config.yaml`. Command-line flags are layered on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::Axis;

/// Every user-facing option of a background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Background color, or the first gradient color
    pub color: String,
    /// Second gradient color; a flat background when absent
    pub color2: Option<String>,
    /// Gradient direction
    pub gradient: Axis,

    /// Image repeated across the screen
    pub tile: Option<PathBuf>,
    /// Kept wide so out-of-range values can be reported instead of wrapping
    pub tile_alpha: i64,

    /// Image placed once on top of the color field and tiles
    pub emblem: Option<PathBuf>,
    pub emblem_alpha: i64,
    pub emboss: bool,

    /// Emblem geometry, `[W][xH][{+-}X{+-}Y]`
    pub geometry: Option<String>,
    pub center_x: bool,
    pub center_y: bool,
    /// Emblem width as a percentage of the screen width
    pub scale_width: Option<f64>,
    /// Emblem height as a percentage of the screen height
    pub scale_height: Option<f64>,
    /// Area the emblem must stay clear of, `WxH[{+-}X{+-}Y]`
    pub avoid: Option<String>,
    pub keep_aspect: bool,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: "#356390".to_string(),
            color2: None,
            gradient: Axis::Vertical,
            tile: None,
            tile_alpha: 255,
            emblem: None,
            emblem_alpha: 255,
            emboss: false,
            geometry: None,
            center_x: false,
            center_y: false,
            scale_width: None,
            scale_height: None,
            avoid: None,
            keep_aspect: false,
        }
    }
}

impl BackgroundConfig {
    /// Load the first config file found (user, then system), or return
    /// defaults if none exists or it cannot be parsed
    pub fn load() -> Self {
        for path in crate::config_paths::config_candidates() {
            if !path.exists() {
                tracing::debug!("Config file not found at {}", path.display());
                continue;
            }

            return match Self::load_from(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("{}; using defaults", e);
                    Self::default()
                }
            };
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }

    /// Load a specific config file; unlike [`load`](Self::load) a failure is
    /// reported to the caller
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // An empty file is a valid, all-default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating its directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
