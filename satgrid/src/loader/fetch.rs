//! Cache-or-fetch resolution of a single tile.

use std::path::Path;

use tracing::{debug, warn};

use super::report::{TileFailure, TileOutcome};
use crate::cache::{cached_path, write_tile};
use crate::coord::TileIndex;
use crate::provider::HttpClient;
use crate::source::TileSource;

/// Resolves one tile to a local file.
///
/// The cache is checked before any request is issued. A 200 response is
/// written verbatim to the cache path; anything else is reported and the tile
/// skipped. `cancelled` is polled before touching the cache or the network.
pub(crate) fn resolve_tile(
    client: &dyn HttpClient,
    source: &TileSource,
    cache_root: &Path,
    index: &TileIndex,
    cancelled: impl Fn() -> bool,
) -> TileOutcome {
    if cancelled() {
        return TileOutcome::Cancelled;
    }

    let path = cached_path(cache_root, index);
    if path.exists() {
        debug!(tile = %index, path = %path.display(), "Tile cache hit");
        return TileOutcome::CacheHit(path);
    }

    let url = source.resolve(index);
    let response = match client.get(&url) {
        Ok(response) => response,
        Err(e) => {
            warn!(tile = %index, url = %url, error = %e, "Failed loading tile");
            return TileOutcome::Failed(TileFailure::Transport {
                url,
                reason: e.to_string(),
            });
        }
    };

    if !response.is_ok() {
        warn!(
            tile = %index,
            url = %response.url,
            status = response.status,
            "Failed loading tile"
        );
        return TileOutcome::Failed(TileFailure::Status {
            url: response.url,
            status: response.status,
        });
    }

    match write_tile(&path, &response.body) {
        Ok(()) => {
            debug!(
                tile = %index,
                bytes = response.body.len(),
                path = %path.display(),
                "Tile downloaded"
            );
            TileOutcome::Downloaded(path)
        }
        Err(e) => {
            warn!(tile = %index, url = %response.url, error = %e, "Failed caching tile");
            TileOutcome::Failed(TileFailure::Write {
                url: response.url,
                reason: e.to_string(),
            })
        }
    }
}
