//! Filesystem operations on the tile cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::debug;

use super::path::cache_root;
use crate::source::TileSource;

/// Suffix of in-progress tile writes.
const PARTIAL_SUFFIX: &str = "part";

/// Distinguishes partial files of concurrent writers within one process.
static WRITE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to create the cache directory for a source.
    #[error("Failed to create cache directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// Failed to write a tile file.
    #[error("Failed to write cached tile {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Failed to read the cache directory.
    #[error("Failed to read cache directory {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Creates (including parents) the cache directory for a source.
///
/// Returns the directory path.
pub fn ensure_cache_root(cache_dir: &Path, source: &TileSource) -> Result<PathBuf, CacheError> {
    let root = cache_root(cache_dir, source);
    fs::create_dir_all(&root).map_err(|e| CacheError::CreateDir {
        path: root.clone(),
        source: e,
    })?;
    debug!(path = %root.display(), source = %source, "Cache root ready");
    Ok(root)
}

/// Writes tile bytes verbatim to `path`.
///
/// The bytes go to a uniquely named sibling `.part` file first and are renamed
/// into place, so the final name only ever refers to a complete tile.
/// Concurrent writers of the same tile race on the rename; the last one wins.
/// On failure the partial file is removed.
pub fn write_tile(path: &Path, bytes: &[u8]) -> Result<(), CacheError> {
    let partial = path.with_extension(partial_extension(path));

    let result = fs::write(&partial, bytes).and_then(|_| fs::rename(&partial, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&partial);
        return Err(CacheError::Write {
            path: path.to_path_buf(),
            source: e,
        });
    }
    Ok(())
}

/// Count files and total bytes below a cache directory.
///
/// In-progress `.part` files are skipped. A missing directory counts as empty.
pub fn disk_cache_stats(cache_dir: &Path) -> Result<(u64, u64), CacheError> {
    if !cache_dir.exists() {
        return Ok((0, 0));
    }

    let mut files = 0u64;
    let mut bytes = 0u64;
    let mut pending = vec![cache_dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| CacheError::Read {
            path: dir.clone(),
            source: e,
        })?;

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            if metadata.is_dir() {
                pending.push(path);
            } else if path.extension().map(|e| e != PARTIAL_SUFFIX).unwrap_or(true) {
                files += 1;
                bytes += metadata.len();
            }
        }
    }

    Ok((files, bytes))
}

/// `jpg` -> `jpg.<pid>-<seq>.part`
fn partial_extension(path: &Path) -> String {
    let unique = format!(
        "{}-{}.{}",
        std::process::id(),
        WRITE_SEQUENCE.fetch_add(1, Ordering::Relaxed),
        PARTIAL_SUFFIX
    );
    match path.extension() {
        Some(ext) => format!("{}.{}", ext.to_string_lossy(), unique),
        None => unique,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::path::{cached_path, tile_file_name};
    use crate::coord::TileIndex;
    use tempfile::TempDir;

    fn source() -> TileSource {
        TileSource::new("https://tiles.example.com/{z}/{x}/{y}.jpg").unwrap()
    }

    #[test]
    fn test_ensure_cache_root_creates_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("deep").join("nested");

        let root = ensure_cache_root(&base, &source()).unwrap();

        assert!(root.is_dir());
        assert_eq!(root, cache_root(&base, &source()));
        // Idempotent
        assert!(ensure_cache_root(&base, &source()).is_ok());
    }

    #[test]
    fn test_ensure_cache_root_fails_on_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"not a dir").unwrap();

        let result = ensure_cache_root(&blocker, &source());
        assert!(matches!(result, Err(CacheError::CreateDir { .. })));
    }

    #[test]
    fn test_write_tile_writes_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = cached_path(temp.path(), &TileIndex::new(1, 2, 3));
        let bytes = vec![0xFF, 0xD8, 0x00, 0x10, 0xFF, 0xD9];

        write_tile(&path, &bytes).unwrap();

        assert_eq!(fs::read(&path).unwrap(), bytes);
        let leftovers = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "part").unwrap_or(false))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_write_tile_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(tile_file_name(&TileIndex::new(0, 0, 0)));

        write_tile(&path, b"first").unwrap();
        write_tile(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_racing_writers_leave_one_complete_tile() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(tile_file_name(&TileIndex::new(7, 7, 4)));
        let first = vec![0xAAu8; 256 * 1024];
        let second = vec![0x55u8; 192 * 1024];

        let (path_ref, first_ref, second_ref) = (&path, &first, &second);
        std::thread::scope(|scope| {
            for body in [first_ref, second_ref] {
                scope.spawn(move || {
                    for _ in 0..20 {
                        write_tile(path_ref, body).unwrap();
                        // Readers only ever see a whole tile under the final name
                        let seen = fs::read(path_ref).unwrap();
                        assert!(&seen == first_ref || &seen == second_ref);
                    }
                });
            }
        });

        let written = fs::read(&path).unwrap();
        assert!(written == first || written == second);
        let leftovers = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "part").unwrap_or(false))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_write_tile_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("x0_y0_z0.jpg");

        let result = write_tile(&path, b"data");
        assert!(matches!(result, Err(CacheError::Write { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_disk_cache_stats() {
        let temp = TempDir::new().unwrap();
        let root = ensure_cache_root(temp.path(), &source()).unwrap();

        write_tile(&root.join("x0_y0_z1.jpg"), &[0u8; 100]).unwrap();
        write_tile(&root.join("x1_y0_z1.jpg"), &[0u8; 50]).unwrap();
        fs::write(root.join("x1_y1_z1.jpg.part"), [0u8; 10]).unwrap();

        let (files, bytes) = disk_cache_stats(temp.path()).unwrap();
        assert_eq!(files, 2);
        assert_eq!(bytes, 150);
    }

    #[test]
    fn test_disk_cache_stats_missing_dir() {
        let temp = TempDir::new().unwrap();
        let stats = disk_cache_stats(&temp.path().join("nope")).unwrap();
        assert_eq!(stats, (0, 0));
    }
}
