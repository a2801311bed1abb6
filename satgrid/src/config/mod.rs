//! User configuration file.
//!
//! Settings are read from `~/.satgrid/config.ini`. A missing file yields the
//! defaults; command-line flags are layered on top by the CLI.

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    config_directory, config_file_path, default_cache_dir, expand_tilde, CONFIG_FILE_NAME,
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_SOURCE_URL, DEFAULT_ZOOM,
};
pub use file::ConfigFileError;
pub use settings::{CacheSettings, ConfigFile, DownloadSettings, SourceSettings, ViewSettings};
