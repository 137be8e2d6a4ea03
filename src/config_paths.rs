//! Centralized configuration paths for backdrop
//!
//! User files live under:
//! - Unix/macOS: `~/.config/backdrop/`
//! - Windows: `%APPDATA%\backdrop\`
//!
//! The system-wide fallback is `/etc/backdrop/config.yaml`.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "backdrop";

/// Base config directory for backdrop
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/backdrop`
///   - Else: `~/.config/backdrop`
///
/// Windows:
///   - `%APPDATA%\backdrop`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/backdrop/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `/etc/backdrop/config.yaml`
pub fn system_config_file() -> PathBuf {
    PathBuf::from("/etc").join(APP_DIR).join("config.yaml")
}

/// Config files in lookup order: user first, then system
pub fn config_candidates() -> Vec<PathBuf> {
    config_file()
        .into_iter()
        .chain(std::iter::once(system_config_file()))
        .collect()
}

/// `~/.config/backdrop/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
