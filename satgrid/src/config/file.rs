//! Configuration file handling for ~/.satgrid/config.ini.
//!
//! Settings structs live in [`super::settings`], constants in
//! [`super::defaults`], parsing in [`super::parser`], and serialization in
//! [`super::writer`].

use std::path::Path;

use ini::Ini;
use thiserror::Error;

use super::defaults::config_file_path;
use super::settings::ConfigFile;
use crate::loader::LoaderConfig;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.satgrid/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Build a loader configuration from the file's values.
    pub fn to_loader_config(&self) -> LoaderConfig {
        LoaderConfig::new(
            self.source.url.clone(),
            self.view.latitude,
            self.view.longitude,
            self.view.zoom,
            self.cache.directory.clone(),
        )
        .with_block_radius(self.view.blocks)
        .with_parallel(self.download.parallel)
        .with_timeout_secs(self.download.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.view.zoom, DEFAULT_ZOOM);
        assert_eq!(config.view.blocks, crate::loader::DEFAULT_BLOCK_RADIUS);
        assert_eq!(config.cache.directory, default_cache_dir());
        assert_eq!(config.download.timeout, crate::provider::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.source.url = "https://t.example.com/{Z}/{X}/{Y}".to_string();
        config.view.blocks = 0;
        config.cache.directory = PathBuf::from("/srv/tiles");
        config.save_to(&config_path).unwrap();

        assert!(config_path.exists());
        assert_eq!(ConfigFile::load_from(&config_path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_invalid_value() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        fs::write(&config_path, "[view]\nzoom = 40\n").unwrap();

        let err = ConfigFile::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
        assert!(err.to_string().contains("view.zoom = '40'"));
    }

    #[test]
    fn test_to_loader_config() {
        let mut config = ConfigFile::default();
        config.view.blocks = 5;
        config.download.parallel = 2;
        config.download.timeout = 9;

        let loader = config.to_loader_config();

        assert_eq!(loader.source, config.source.url);
        assert_eq!(loader.latitude, config.view.latitude);
        assert_eq!(loader.zoom, config.view.zoom);
        assert_eq!(loader.block_radius, 5);
        assert_eq!(loader.parallel, 2);
        assert_eq!(loader.timeout_secs, 9);
        assert_eq!(loader.cache_dir, config.cache.directory);
    }
}
