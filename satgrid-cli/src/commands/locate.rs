//! Locate command - show the tile geometry of a point without fetching.

use clap::Args;
use satgrid::cache::cached_path_for_source;
use satgrid::config::ConfigFile;
use satgrid::coord::{tile_to_lat_lon, to_tile_coords, zoom_to_resolution, TileIndex};
use satgrid::source::TileSource;

use crate::error::CliError;

/// Arguments for the locate command.
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Zoom level (0-31)
    #[arg(long)]
    pub zoom: Option<u8>,
}

/// Run the locate command.
pub fn run(args: LocateArgs, config: &ConfigFile) -> Result<(), CliError> {
    let lat = args.lat.unwrap_or(config.view.latitude);
    let lon = args.lon.unwrap_or(config.view.longitude);
    let zoom = args.zoom.unwrap_or(config.view.zoom);

    let coords = to_tile_coords(lat, lon, zoom)?;
    let index = coords.floor();
    let (dx, dy) = coords.offset();
    let (north, west) = tile_to_lat_lon(&index);
    let (south, east) = tile_to_lat_lon(&TileIndex::new(index.x + 1, index.y + 1, zoom));

    println!("Location: {}, {}", lat, lon);
    println!("  Zoom:        {}", zoom);
    println!("  Tile coords: x={:.6}, y={:.6}", coords.x, coords.y);
    println!("  Tile:        {} (x={}, y={})", index, index.x, index.y);
    println!("  Offset:      ({:.6}, {:.6})", dx, dy);
    println!("  North-west:  {:.6}, {:.6}", north, west);
    println!("  South-east:  {:.6}, {:.6}", south, east);
    println!("  Resolution:  {:.4} m/px", zoom_to_resolution(lat, zoom));

    let source = TileSource::new(config.source.url.clone())?;
    println!();
    println!("  URL:   {}", source.resolve(&index));
    println!(
        "  Cache: {}",
        cached_path_for_source(&config.cache.directory, &source, &index).display()
    );

    Ok(())
}
