//! Bounded tile grid around a center tile.

use crate::coord::{max_tile_index, TileIndex};

/// Inclusive rectangle of tile indices at one zoom level.
///
/// Built from a center and a block radius; each axis is clamped to the grid
/// independently, so the rectangle shrinks at the map edges instead of
/// wrapping or failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub zoom: u8,
}

impl GridBounds {
    /// Grid of `radius` rings around `center`, clamped to `0..=2^zoom - 1`.
    pub fn around(center: &TileIndex, radius: u32) -> Self {
        let max = max_tile_index(center.zoom);
        Self {
            min_x: center.x.saturating_sub(radius),
            min_y: center.y.saturating_sub(radius),
            max_x: center.x.saturating_add(radius).min(max),
            max_y: center.y.saturating_add(radius).min(max),
            zoom: center.zoom,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u64 {
        (self.max_x as u64 + 1).saturating_sub(self.min_x as u64)
    }

    /// Number of rows.
    pub fn height(&self) -> u64 {
        (self.max_y as u64 + 1).saturating_sub(self.min_y as u64)
    }

    /// Number of tiles in the grid.
    pub fn len(&self) -> u64 {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the grid in row-major order: `y` outer, `x` inner.
    pub fn indices(&self) -> impl Iterator<Item = TileIndex> {
        let Self {
            min_x,
            min_y,
            max_x,
            max_y,
            zoom,
        } = *self;
        (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| TileIndex { x, y, zoom }))
    }
}
