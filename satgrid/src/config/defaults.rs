//! Default values and path helpers for the configuration file.

use std::path::PathBuf;

/// Tile source used when none is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Default view center (Zurich main station).
pub const DEFAULT_LATITUDE: f64 = 47.3779;
pub const DEFAULT_LONGITUDE: f64 = 8.5403;

pub const DEFAULT_ZOOM: u8 = 17;

/// Name of the directory under `$HOME` holding the config file.
pub const CONFIG_DIR_NAME: &str = ".satgrid";

pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default cache base directory.
///
/// Uses the platform cache directory (`~/.cache/satgrid` on Linux), falling
/// back to `./satgrid-cache` when none is known.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("satgrid"))
        .unwrap_or_else(|| PathBuf::from("satgrid-cache"))
}

/// Get the path to the config directory (~/.satgrid).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Get the path to the config file (~/.satgrid/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
