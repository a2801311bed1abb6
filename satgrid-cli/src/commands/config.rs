//! Configuration management CLI commands.
//!
//! Provides `config init`, `config list` and `config path`.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use satgrid::config::{config_file_path, ConfigFile};

use super::common::load_config;
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with the default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
///
/// Only `list` reads the file, so `path` and `init --force` still work when
/// the existing file is invalid.
pub fn run(command: ConfigCommands, path: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_path(path);

    match command {
        ConfigCommands::Init { force } => {
            if write_default(&path, force)? {
                println!("Wrote default configuration to {}", path.display());
            } else {
                println!("Configuration already exists at {}", path.display());
                println!("Use --force to overwrite it with the defaults.");
            }
            Ok(())
        }
        ConfigCommands::List => {
            let config = load_config(Some(&path))?;
            print!("{}", render_settings(&config));
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
            if !path.exists() {
                println!("(file does not exist, defaults are in use)");
            }
            Ok(())
        }
    }
}

fn resolve_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf).unwrap_or_else(config_file_path)
}

/// Write the default settings to `path`. Returns false if a file exists and
/// `force` is not set.
fn write_default(path: &Path, force: bool) -> Result<bool, CliError> {
    if path.exists() && !force {
        return Ok(false);
    }
    ConfigFile::default().save_to(path)?;
    Ok(true)
}

/// Render the effective settings, one `[section]` block per section.
fn render_settings(config: &ConfigFile) -> String {
    format!(
        "[source]\n  url = {}\n\n[view]\n  latitude = {}\n  longitude = {}\n  zoom = {}\n  \
         blocks = {}\n\n[cache]\n  directory = {}\n\n[download]\n  timeout = {}\n  \
         parallel = {}\n",
        config.source.url,
        config.view.latitude,
        config.view.longitude,
        config.view.zoom,
        config.view.blocks,
        config.cache.directory.display(),
        config.download.timeout,
        config.download.parallel,
    )
}
