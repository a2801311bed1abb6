//! Configuration for a tile loading session.

use std::path::PathBuf;

use crate::provider::DEFAULT_TIMEOUT_SECS;

/// Default number of tile rings around the center tile.
pub const DEFAULT_BLOCK_RADIUS: u32 = 2;

/// Default number of concurrent tile fetches.
pub const DEFAULT_PARALLEL_FETCHES: usize = 8;

/// Configuration for a [`TileLoader`](super::TileLoader).
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    /// Tile source URL template with `{x}`, `{y}`, `{z}` placeholders.
    pub source: String,

    /// Latitude of the view center in degrees.
    pub latitude: f64,

    /// Longitude of the view center in degrees.
    pub longitude: f64,

    /// Zoom level (0-31).
    pub zoom: u8,

    /// Number of tile rings to load around the center tile.
    pub block_radius: u32,

    /// Base directory for cached tiles.
    ///
    /// Each source gets its own subdirectory below this one.
    pub cache_dir: PathBuf,

    /// Maximum concurrent fetches. `1` loads strictly one tile at a time.
    pub parallel: usize,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl LoaderConfig {
    /// Create a configuration with default radius, parallelism and timeout.
    pub fn new(
        source: impl Into<String>,
        latitude: f64,
        longitude: f64,
        zoom: u8,
        cache_dir: PathBuf,
    ) -> Self {
        Self {
            source: source.into(),
            latitude,
            longitude,
            zoom,
            block_radius: DEFAULT_BLOCK_RADIUS,
            cache_dir,
            parallel: DEFAULT_PARALLEL_FETCHES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the block radius.
    pub fn with_block_radius(mut self, radius: u32) -> Self {
        self.block_radius = radius;
        self
    }

    /// Set the maximum concurrent fetches (at least 1).
    pub fn with_parallel(mut self, parallel: usize) -> Self {
        self.parallel = parallel.max(1);
        self
    }

    /// Set the HTTP timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Move the view center.
    pub fn with_center(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::new("http://t/{z}/{x}/{y}", 1.0, 2.0, 10, PathBuf::from("/c"));

        assert_eq!(config.block_radius, DEFAULT_BLOCK_RADIUS);
        assert_eq!(config.parallel, DEFAULT_PARALLEL_FETCHES);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.cache_dir, PathBuf::from("/c"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoaderConfig::new("http://t/{z}/{x}/{y}", 1.0, 2.0, 10, PathBuf::from("/c"))
            .with_block_radius(4)
            .with_parallel(0)
            .with_timeout_secs(5)
            .with_center(-33.9, 151.2);

        assert_eq!(config.block_radius, 4);
        assert_eq!(config.parallel, 1);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!((config.latitude, config.longitude), (-33.9, 151.2));
    }
}
