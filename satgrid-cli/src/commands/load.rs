//! Load command - fetch and cache the tile grid around a point.

use std::path::PathBuf;

use clap::Args;
use satgrid::config::ConfigFile;
use satgrid::loader::{LoadReport, LoaderConfig, TileLoader};

use crate::error::CliError;

/// Arguments for the load command.
///
/// Every flag overrides the matching configuration file value.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Tile URL template with {x}, {y} and {z} placeholders
    #[arg(long)]
    pub source: Option<String>,

    /// Latitude of the center point in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the center point in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Zoom level (0-31)
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Number of tile rings around the center tile
    #[arg(long)]
    pub blocks: Option<u32>,

    /// Base directory for the tile cache
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Maximum concurrent downloads
    #[arg(long)]
    pub parallel: Option<usize>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl LoadArgs {
    /// Layer the command-line flags over the configuration file.
    pub fn to_loader_config(&self, config: &ConfigFile) -> LoaderConfig {
        let mut loader = config.to_loader_config();

        if let Some(source) = &self.source {
            loader.source = source.clone();
        }
        let lat = self.lat.unwrap_or(loader.latitude);
        let lon = self.lon.unwrap_or(loader.longitude);
        loader = loader.with_center(lat, lon);
        if let Some(zoom) = self.zoom {
            loader.zoom = zoom;
        }
        if let Some(blocks) = self.blocks {
            loader = loader.with_block_radius(blocks);
        }
        if let Some(dir) = &self.cache_dir {
            loader.cache_dir = dir.clone();
        }
        if let Some(parallel) = self.parallel {
            loader = loader.with_parallel(parallel);
        }
        if let Some(timeout) = self.timeout {
            loader = loader.with_timeout_secs(timeout);
        }
        loader
    }
}

/// Run the load command.
pub fn run(args: LoadArgs, config: &ConfigFile) -> Result<(), CliError> {
    let loader = TileLoader::new(args.to_loader_config(config))?;

    let handle = loader.abort_handle();
    ctrlc::set_handler(move || {
        eprintln!();
        eprintln!("Received interrupt, aborting load...");
        handle.abort();
    })
    .map_err(|e| CliError::Signal(e.to_string()))?;

    let center = loader.center_tile_index();
    let bounds = loader.grid_bounds();
    println!("Loading tiles from {}", loader.object_uri());
    println!(
        "  Center: {}, {} -> tile {}",
        loader.latitude(),
        loader.longitude(),
        center
    );
    println!(
        "  Grid:   x {}..={}, y {}..={} ({} tiles)",
        bounds.min_x,
        bounds.max_x,
        bounds.min_y,
        bounds.max_y,
        bounds.len()
    );
    println!("  Cache:  {}", loader.cache_root().display());
    println!();

    let report = loader.start();

    for tile in loader.tiles() {
        println!("{}  {}", tile.index(), tile.image_path().display());
    }

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &LoadReport) {
    if !report.is_published() {
        println!("Load aborted, {} tiles were already cached", report.resolved());
        return;
    }

    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        println!();
        println!("Failed tiles:");
        for (index, failure) in &failures {
            println!("  {}: {}", index, failure);
        }
    }

    println!();
    println!(
        "{} of {} tiles available ({} cached, {} downloaded, {} failed)",
        report.resolved(),
        report.attempted(),
        report.cache_hits(),
        report.downloaded(),
        failures.len()
    );
}
