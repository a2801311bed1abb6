//! Tile loading session.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::LoaderConfig;
use super::error::LoaderError;
use super::fetch::resolve_tile;
use super::grid::GridBounds;
use super::report::LoadReport;
use super::tile::MapTile;
use crate::cache::ensure_cache_root;
use crate::coord::{self, TileIndex};
use crate::provider::{HttpClient, ReqwestClient};
use crate::source::TileSource;

/// Loads and caches the tiles around one geographic point.
///
/// The center tile and the origin offset are derived once, at construction.
/// `start` may be called repeatedly; each call replaces the tile list.
/// Tiles are fetched on a dedicated worker pool, but the published list is
/// always in row-major grid order.
///
/// `start` and `abort` take `&self`, so a loader shared behind an `Arc` can
/// be aborted from another thread while a load is running. See also
/// [`AbortHandle`].
pub struct TileLoader {
    source: TileSource,
    latitude: f64,
    longitude: f64,
    zoom: u8,
    block_radius: u32,
    cache_dir: PathBuf,
    cache_root: PathBuf,
    center: TileIndex,
    origin_offset: (f64, f64),
    client: Arc<dyn HttpClient>,
    workers: rayon::ThreadPool,
    state: Arc<SessionState>,
}

/// State shared with abort handles.
struct SessionState {
    /// Bumped by every `start` and `abort`; a load only publishes if the
    /// generation it started with is still current.
    generation: AtomicU64,
    tiles: RwLock<Vec<MapTile>>,
}

impl SessionState {
    fn abort(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.tiles.write().clear();
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Cancels loads of a [`TileLoader`] from any thread.
#[derive(Clone)]
pub struct AbortHandle {
    state: Arc<SessionState>,
}

impl AbortHandle {
    /// Same as [`TileLoader::abort`].
    pub fn abort(&self) {
        self.state.abort();
    }
}

impl TileLoader {
    /// Creates a session that fetches with a [`ReqwestClient`].
    pub fn new(config: LoaderConfig) -> Result<Self, LoaderError> {
        let client = ReqwestClient::with_timeout(config.timeout_secs)?;
        Self::with_client(config, Arc::new(client))
    }

    /// Creates a session with an injected HTTP client.
    ///
    /// Validates the source and the view, then creates the cache directory
    /// for the source. Nothing is fetched until [`start`](Self::start).
    pub fn with_client(
        config: LoaderConfig,
        client: Arc<dyn HttpClient>,
    ) -> Result<Self, LoaderError> {
        let source = TileSource::new(config.source)?;
        if !source.has_all_placeholders() {
            warn!(
                source = %source,
                "Tile source lacks {{x}}, {{y}} or {{z}}; tiles will share URLs"
            );
        }
        let coords = coord::to_tile_coords(config.latitude, config.longitude, config.zoom)?;

        let workers = rayon::ThreadPoolBuilder::new()
            .num_threads(config.parallel.max(1))
            .thread_name(|i| format!("tile-fetch-{}", i))
            .build()
            .map_err(|e| LoaderError::Workers(e.to_string()))?;

        let cache_root = ensure_cache_root(&config.cache_dir, &source)?;

        let center = coords.floor();
        let origin_offset = coords.offset();

        debug!(
            source = %source,
            center = %center,
            offset_x = origin_offset.0,
            offset_y = origin_offset.1,
            cache = %cache_root.display(),
            "Tile loader configured"
        );

        Ok(Self {
            source,
            latitude: config.latitude,
            longitude: config.longitude,
            zoom: config.zoom,
            block_radius: config.block_radius,
            cache_dir: config.cache_dir,
            cache_root,
            center,
            origin_offset,
            client,
            workers,
            state: Arc::new(SessionState {
                generation: AtomicU64::new(0),
                tiles: RwLock::new(Vec::new()),
            }),
        })
    }

    /// Loads every tile within the block radius of the center tile.
    ///
    /// The previous tile list is discarded first. Cached tiles are reused
    /// without network access; missing ones are fetched and written to the
    /// cache. Failed tiles are skipped and listed in the returned report.
    /// If the load is aborted before it finishes, nothing is published.
    ///
    /// The cache directory is recreated if it was removed since the last load.
    pub fn start(&self) -> LoadReport {
        let generation = self.state.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.tiles.write().clear();

        if let Err(e) = ensure_cache_root(&self.cache_dir, &self.source) {
            warn!(error = %e, "Cache directory unavailable, downloads will not be cached");
        }

        let bounds = self.grid_bounds();
        let indices: Vec<TileIndex> = bounds.indices().collect();
        let started = Instant::now();

        info!(
            source = %self.source,
            center = %self.center,
            radius = self.block_radius,
            tiles = indices.len(),
            "Loading tile grid"
        );

        let outcomes = self.workers.install(|| {
            indices
                .par_iter()
                .map(|index| {
                    let outcome = resolve_tile(
                        self.client.as_ref(),
                        &self.source,
                        &self.cache_root,
                        index,
                        || !self.state.is_current(generation),
                    );
                    (*index, outcome)
                })
                .collect::<Vec<_>>()
        });

        let tiles: Vec<MapTile> = outcomes
            .iter()
            .filter_map(|(index, outcome)| {
                outcome
                    .image_path()
                    .map(|path| MapTile::new(*index, path.to_path_buf()))
            })
            .collect();

        let published = {
            let mut current = self.state.tiles.write();
            if self.state.is_current(generation) {
                *current = tiles;
                true
            } else {
                false
            }
        };

        let report = LoadReport::new(bounds, outcomes, published);
        info!(
            resolved = report.resolved(),
            cache_hits = report.cache_hits(),
            downloaded = report.downloaded(),
            failed = report.failures().count(),
            published,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Tile grid load finished"
        );
        report
    }

    /// Discards the current tile list and stops any running load from
    /// publishing. Cached files are left on disk. Idempotent.
    pub fn abort(&self) {
        self.state.abort();
    }

    /// Handle that aborts this session from another thread.
    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// The grid that `start` attempts.
    pub fn grid_bounds(&self) -> GridBounds {
        GridBounds::around(&self.center, self.block_radius)
    }

    /// Current set of resolved tiles, in row-major grid order.
    pub fn tiles(&self) -> Vec<MapTile> {
        self.state.tiles.read().clone()
    }

    /// Meters per pixel at the configured center.
    pub fn resolution(&self) -> f64 {
        coord::zoom_to_resolution(self.latitude, self.zoom)
    }

    /// Index of the tile containing the configured center.
    pub fn center_tile_index(&self) -> TileIndex {
        self.center
    }

    /// Fraction of a tile between the center tile's north-west corner and the
    /// configured point, as `(x, y)`.
    pub fn origin_offset(&self) -> (f64, f64) {
        self.origin_offset
    }

    /// Tests if `(lat, lon)` falls inside the center tile.
    ///
    /// Points outside the projection domain are never inside.
    pub fn inside_center_tile(&self, lat: f64, lon: f64) -> bool {
        coord::inside_center_tile(lat, lon, self.zoom, &self.center).unwrap_or(false)
    }

    /// The configured tile source template.
    pub fn object_uri(&self) -> &str {
        self.source.as_str()
    }

    pub fn source(&self) -> &TileSource {
        &self.source
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn block_radius(&self) -> u32 {
        self.block_radius
    }

    /// Directory holding this source's cached tiles.
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }
}
