//! Coordinate type definitions

use thiserror::Error;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.0511;
pub const MAX_LAT: f64 = 85.0511;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Zoom levels addressable with 32-bit tile indices
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 31;

/// Ground resolution in meters per pixel at the equator, zoom 0.
pub const EQUATOR_RESOLUTION: f64 = 156543.034;

/// Index of one tile in the slippy-map grid.
///
/// `x` grows eastwards from the antimeridian, `y` grows southwards from the
/// northern edge of the projection. Both are in `0..=2^zoom - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex {
    /// Column (east-west)
    pub x: u32,
    /// Row (north-south), 0 at north
    pub y: u32,
    /// Zoom level (0-31)
    pub zoom: u8,
}

impl TileIndex {
    /// Creates a tile index without range checking.
    pub const fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Returns true if both axes lie inside the grid for this zoom level.
    pub fn is_valid(&self) -> bool {
        self.zoom <= MAX_ZOOM
            && self.x <= super::max_tile_index(self.zoom)
            && self.y <= super::max_tile_index(self.zoom)
    }
}

impl std::fmt::Display for TileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Fractional position in the tile grid.
///
/// The integer part selects a tile, the fractional part locates the point
/// inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCoords {
    pub x: f64,
    pub y: f64,
    pub zoom: u8,
}

impl TileCoords {
    /// Returns the tile containing this position.
    ///
    /// The eastern and southern edges of the projection (`lon = 180`,
    /// `lat = MIN_LAT`) land exactly on `2^zoom`; they are clamped into the
    /// last column/row so the result always satisfies the grid invariant.
    pub fn floor(&self) -> TileIndex {
        let max = super::max_tile_index(self.zoom) as f64;
        TileIndex {
            x: self.x.floor().clamp(0.0, max) as u32,
            y: self.y.floor().clamp(0.0, max) as u32,
            zoom: self.zoom,
        }
    }

    /// Fraction of a tile between the tile's north-west corner and this position.
    pub fn offset(&self) -> (f64, f64) {
        let index = self.floor();
        (self.x - index.x as f64, self.y - index.y as f64)
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside the Web Mercator range
    #[error("Invalid latitude: {0} (must be between -85.0511 and 85.0511)")]
    InvalidLatitude(f64),
    /// Longitude is outside -180.0 to 180.0
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
    /// Zoom level above 31
    #[error("Zoom level {0} too high (must be between 0 and 31)")]
    InvalidZoom(u8),
}
