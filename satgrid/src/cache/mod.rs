//! On-disk tile cache.
//!
//! Tiles are stored as plain files, one directory per tile source. Nothing in
//! this crate ever deletes a cached tile; entries persist across sessions and
//! process restarts.

mod path;
mod store;

pub use path::{cache_root, cached_path, cached_path_for_source, source_hash, tile_file_name};
pub use store::{disk_cache_stats, ensure_cache_root, write_tile, CacheError};
