//! Cache path construction and filename handling.
//!
//! Cached tiles live in a flat directory per tile source:
//!
//! ```text
//! <cache_dir>/<source_hash>/x<x>_y<y>_z<zoom>.jpg
//! ```
//!
//! The source hash keeps tiles from different providers apart. The filename
//! doubles as the cache existence check, so its format must never change.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::coord::TileIndex;
use crate::source::TileSource;

/// Number of digest bytes kept in the partition directory name.
const SOURCE_HASH_BYTES: usize = 16;

/// Deterministic partition key for a tile source.
///
/// The first 128 bits of the SHA-256 digest of the template, as lowercase hex.
pub fn source_hash(source: &TileSource) -> String {
    let digest = Sha256::digest(source.as_str().as_bytes());
    digest[..SOURCE_HASH_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Get the cache directory for a tile source.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use satgrid::cache::cache_root;
/// use satgrid::source::TileSource;
///
/// let source = TileSource::new("https://tile.example.org/{z}/{x}/{y}.png").unwrap();
/// let root = cache_root(&PathBuf::from("/cache"), &source);
///
/// assert!(root.starts_with("/cache"));
/// assert_eq!(root.file_name().unwrap().len(), 32);
/// ```
pub fn cache_root(cache_dir: &Path, source: &TileSource) -> PathBuf {
    cache_dir.join(source_hash(source))
}

/// Filename of a cached tile.
///
/// # Example
///
/// ```
/// use satgrid::cache::tile_file_name;
/// use satgrid::coord::TileIndex;
///
/// assert_eq!(tile_file_name(&TileIndex::new(3, 5, 2)), "x3_y5_z2.jpg");
/// ```
pub fn tile_file_name(index: &TileIndex) -> String {
    format!("x{}_y{}_z{}.jpg", index.x, index.y, index.zoom)
}

/// Full path of a cached tile below an existing cache root.
pub fn cached_path(root: &Path, index: &TileIndex) -> PathBuf {
    root.join(tile_file_name(index))
}

/// Full path of a cached tile for a source below the base cache directory.
pub fn cached_path_for_source(cache_dir: &Path, source: &TileSource, index: &TileIndex) -> PathBuf {
    cached_path(&cache_root(cache_dir, source), index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn osm() -> TileSource {
        TileSource::new("https://tile.openstreetmap.org/{z}/{x}/{y}.png").unwrap()
    }

    #[test]
    fn test_tile_file_name_format() {
        let index = TileIndex::new(68645, 45898, 17);
        assert_eq!(tile_file_name(&index), "x68645_y45898_z17.jpg");
    }

    #[test]
    fn test_source_hash_is_stable() {
        let a = source_hash(&osm());
        let b = source_hash(&osm());
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_known_digest_prefix() {
        // SHA-256("abc") = ba7816bf8f01cfea414140de5dae2223...
        let source = TileSource::new("abc").unwrap();
        assert_eq!(source_hash(&source), "ba7816bf8f01cfea414140de5dae2223");
    }

    #[test]
    fn test_distinct_sources_get_distinct_roots() {
        let other = TileSource::new("https://tile.openstreetmap.org/{z}/{x}/{y}.jpg").unwrap();
        let dir = PathBuf::from("/cache");
        assert_ne!(cache_root(&dir, &osm()), cache_root(&dir, &other));
    }

    #[test]
    fn test_cached_path_for_source() {
        let dir = PathBuf::from("/cache");
        let index = TileIndex::new(1, 2, 3);
        let path = cached_path_for_source(&dir, &osm(), &index);

        assert_eq!(path.parent().unwrap(), cache_root(&dir, &osm()));
        assert_eq!(path.file_name().unwrap(), "x1_y2_z3.jpg");
    }
}
