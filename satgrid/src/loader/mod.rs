//! Tile grid loading.
//!
//! A [`TileLoader`] is built from a [`LoaderConfig`] and owns one view: a
//! center point, a zoom level and a block radius. Each `start` resolves every
//! tile in the surrounding [`GridBounds`] to a cached image file, downloading
//! the ones that are missing, and publishes the successes as [`MapTile`]s.
//!
//! ```no_run
//! use satgrid::loader::{LoaderConfig, TileLoader};
//!
//! let config = LoaderConfig::new(
//!     "https://tiles.example.com/{z}/{x}/{y}.jpg",
//!     47.3779,
//!     8.5403,
//!     17,
//!     "/tmp/satgrid".into(),
//! );
//! let loader = TileLoader::new(config)?;
//! let report = loader.start();
//! for tile in loader.tiles() {
//!     println!("{} -> {}", tile.index(), tile.image_path().display());
//! }
//! println!("{} of {} tiles", report.resolved(), report.attempted());
//! # Ok::<(), satgrid::loader::LoaderError>(())
//! ```

mod config;
mod error;
mod fetch;
mod grid;
mod report;
mod session;
mod tile;

pub use config::{LoaderConfig, DEFAULT_BLOCK_RADIUS, DEFAULT_PARALLEL_FETCHES};
pub use error::LoaderError;
pub use grid::GridBounds;
pub use report::{LoadReport, TileFailure, TileOutcome};
pub use session::{AbortHandle, TileLoader};
pub use tile::MapTile;
