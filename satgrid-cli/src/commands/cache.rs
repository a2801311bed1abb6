//! Cache inspection CLI commands.

use std::path::PathBuf;

use clap::Subcommand;
use satgrid::cache::{cache_root, disk_cache_stats};
use satgrid::config::ConfigFile;
use satgrid::source::TileSource;

use super::common::format_size;
use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show disk cache statistics
    Stats {
        /// Only count tiles of this source template
        #[arg(long)]
        source: Option<String>,

        /// Base directory of the tile cache
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
}

/// Run a cache subcommand.
pub fn run(action: CacheAction, config: &ConfigFile) -> Result<(), CliError> {
    match action {
        CacheAction::Stats { source, cache_dir } => {
            let base = cache_dir.unwrap_or_else(|| config.cache.directory.clone());
            let dir = match source {
                Some(template) => {
                    let source = TileSource::new(template)?;
                    println!("Source: {}", source);
                    cache_root(&base, &source)
                }
                None => base,
            };

            println!("Disk cache: {}", dir.display());

            match disk_cache_stats(&dir) {
                Ok((files, bytes)) => {
                    println!("  Files: {}", files);
                    println!("  Size:  {}", format_size(bytes));
                    Ok(())
                }
                Err(e) => Err(CliError::CacheStats(e.to_string())),
            }
        }
    }
}
