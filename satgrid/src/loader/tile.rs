//! Resolved tiles.

use std::path::{Path, PathBuf};

use crate::coord::TileIndex;

/// A tile that has been resolved to an image file on disk.
///
/// Only ever created after a cache hit or a successful fetch-and-persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTile {
    index: TileIndex,
    image_path: PathBuf,
}

impl MapTile {
    pub fn new(index: TileIndex, image_path: PathBuf) -> Self {
        Self { index, image_path }
    }

    pub fn index(&self) -> TileIndex {
        self.index
    }

    /// X tile coordinate.
    pub fn x(&self) -> u32 {
        self.index.x
    }

    /// Y tile coordinate.
    pub fn y(&self) -> u32 {
        self.index.y
    }

    /// Zoom level.
    pub fn zoom(&self) -> u8 {
        self.index.zoom
    }

    /// Image associated with this tile.
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }
}
