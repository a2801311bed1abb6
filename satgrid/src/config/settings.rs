//! Settings structs for the user configuration file.

use std::path::PathBuf;

use super::defaults::*;

/// Contents of `~/.satgrid/config.ini`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub source: SourceSettings,
    pub view: ViewSettings,
    pub cache: CacheSettings,
    pub download: DownloadSettings,
}

/// `[source]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    /// Tile URL template with `{x}`, `{y}`, `{z}` placeholders.
    pub url: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

/// `[view]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Tile rings around the center tile.
    pub blocks: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            zoom: DEFAULT_ZOOM,
            blocks: crate::loader::DEFAULT_BLOCK_RADIUS,
        }
    }
}

/// `[cache]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    /// Base directory; each tile source gets a subdirectory.
    pub directory: PathBuf,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            directory: default_cache_dir(),
        }
    }
}

/// `[download]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSettings {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Concurrent tile fetches.
    pub parallel: usize,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            timeout: crate::provider::DEFAULT_TIMEOUT_SECS,
            parallel: crate::loader::DEFAULT_PARALLEL_FETCHES,
        }
    }
}
