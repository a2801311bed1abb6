//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and Web Mercator tile-grid coordinates used by slippy-map tile servers.
//!
//! See <http://wiki.openstreetmap.org/wiki/Slippy_map_tilenames> for the
//! formulas.

mod types;

pub use types::{
    CoordError, TileCoords, TileIndex, EQUATOR_RESOLUTION, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT,
    MIN_LON, MIN_ZOOM,
};

use std::f64::consts::PI;

/// Converts geographic coordinates to fractional tile coordinates.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-85.0511 to 85.0511)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (0 to 31)
///
/// # Returns
///
/// The fractional grid position, or an error if any input lies outside the
/// projection's domain. NaN is rejected like any other out-of-range value.
#[inline]
pub fn to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoords, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }

    let n = tiles_per_axis(zoom);
    let lat_rad = lat * PI / 180.0;

    let x = n * ((lon + 180.0) / 360.0);
    let y = n * (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

    Ok(TileCoords { x, y, zoom })
}

/// Ground resolution in meters per pixel at the given latitude and zoom.
///
/// The caller guarantees the domain; no validation is performed.
#[inline]
pub fn zoom_to_resolution(lat: f64, zoom: u8) -> f64 {
    let lat_rad = lat * PI / 180.0;
    EQUATOR_RESOLUTION * lat_rad.cos() / tiles_per_axis(zoom)
}

/// Tests whether `(lat, lon)` falls inside `center` at the given zoom.
///
/// Callers use this to decide when a viewpoint has drifted far enough that
/// the grid should be reloaded around a new center.
pub fn inside_center_tile(
    lat: f64,
    lon: f64,
    zoom: u8,
    center: &TileIndex,
) -> Result<bool, CoordError> {
    let index = to_tile_coords(lat, lon, zoom)?.floor();
    Ok(index.x == center.x && index.y == center.y)
}

/// Largest valid tile index on either axis at this zoom (`2^zoom - 1`).
#[inline]
pub fn max_tile_index(zoom: u8) -> u32 {
    ((1u64 << zoom.min(MAX_ZOOM)) - 1) as u32
}

/// Converts a tile index back to geographic coordinates.
///
/// Returns the latitude/longitude of the tile's north-west corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileIndex) -> (f64, f64) {
    let n = tiles_per_axis(tile.zoom);

    let lon = tile.x as f64 / n * 360.0 - 180.0;

    let y = tile.y as f64 / n;
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    let lat = lat_rad * 180.0 / PI;

    (lat, lon)
}

#[inline]
fn tiles_per_axis(zoom: u8) -> f64 {
    2.0_f64.powi(zoom as i32)
}
