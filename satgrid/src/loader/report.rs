//! Per-tile outcomes of a grid load.
//!
//! The tile list only holds successes. The report keeps everything else, so
//! callers can tell "nothing to load" from "every fetch failed" from "the
//! load was aborted".

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::grid::GridBounds;
use crate::coord::TileIndex;

/// Why a tile could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileFailure {
    /// The server answered with something other than 200
    #[error("Failed loading {url} with code {status}")]
    Status { url: String, status: u16 },

    /// The request did not complete
    #[error("Failed loading {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The tile was downloaded but could not be persisted
    #[error("Failed caching {url}: {reason}")]
    Write { url: String, reason: String },
}

impl TileFailure {
    /// URL that was requested for the tile.
    pub fn url(&self) -> &str {
        match self {
            TileFailure::Status { url, .. }
            | TileFailure::Transport { url, .. }
            | TileFailure::Write { url, .. } => url,
        }
    }

    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TileFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// What happened to one tile index during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileOutcome {
    /// Found in the cache, no network access
    CacheHit(PathBuf),
    /// Fetched and written to the cache
    Downloaded(PathBuf),
    /// Skipped after a failure
    Failed(TileFailure),
    /// Not attempted because the load was aborted
    Cancelled,
}

impl TileOutcome {
    /// Local image path for resolved tiles.
    pub fn image_path(&self) -> Option<&Path> {
        match self {
            TileOutcome::CacheHit(path) | TileOutcome::Downloaded(path) => Some(path),
            _ => None,
        }
    }
}

/// Summary of one `start` call.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    bounds: GridBounds,
    outcomes: Vec<(TileIndex, TileOutcome)>,
    published: bool,
}

impl LoadReport {
    pub(crate) fn new(
        bounds: GridBounds,
        outcomes: Vec<(TileIndex, TileOutcome)>,
        published: bool,
    ) -> Self {
        Self {
            bounds,
            outcomes,
            published,
        }
    }

    /// The grid that was attempted.
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Outcomes in row-major grid order.
    pub fn outcomes(&self) -> &[(TileIndex, TileOutcome)] {
        &self.outcomes
    }

    /// Number of tile indices in the grid.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn cache_hits(&self) -> usize {
        self.count(|o| matches!(o, TileOutcome::CacheHit(_)))
    }

    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, TileOutcome::Downloaded(_)))
    }

    pub fn cancelled(&self) -> usize {
        self.count(|o| matches!(o, TileOutcome::Cancelled))
    }

    /// Tiles that were resolved to a local file.
    pub fn resolved(&self) -> usize {
        self.cache_hits() + self.downloaded()
    }

    /// Failed tiles with their reasons.
    pub fn failures(&self) -> impl Iterator<Item = (&TileIndex, &TileFailure)> {
        self.outcomes.iter().filter_map(|(index, outcome)| match outcome {
            TileOutcome::Failed(failure) => Some((index, failure)),
            _ => None,
        })
    }

    /// False if the load was aborted and its tiles were discarded.
    pub fn is_published(&self) -> bool {
        self.published
    }

    /// True if every tile in the grid was resolved and published.
    pub fn is_complete(&self) -> bool {
        self.published && self.resolved() == self.attempted()
    }

    fn count(&self, predicate: impl Fn(&TileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LoadReport {
        let bounds = GridBounds::around(&TileIndex::new(1, 0, 1), 0);
        LoadReport::new(
            bounds,
            vec![
                (
                    TileIndex::new(0, 0, 1),
                    TileOutcome::CacheHit(PathBuf::from("/c/x0_y0_z1.jpg")),
                ),
                (
                    TileIndex::new(1, 0, 1),
                    TileOutcome::Downloaded(PathBuf::from("/c/x1_y0_z1.jpg")),
                ),
                (
                    TileIndex::new(0, 1, 1),
                    TileOutcome::Failed(TileFailure::Status {
                        url: "http://t/1/0/1".to_string(),
                        status: 404,
                    }),
                ),
                (TileIndex::new(1, 1, 1), TileOutcome::Cancelled),
            ],
            false,
        )
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.attempted(), 4);
        assert_eq!(report.cache_hits(), 1);
        assert_eq!(report.downloaded(), 1);
        assert_eq!(report.resolved(), 2);
        assert_eq!(report.cancelled(), 1);
        assert!(!report.is_published());
        assert!(!report.is_complete());
    }

    #[test]
    fn test_failures_carry_url_and_status() {
        let report = sample();
        let failures: Vec<_> = report.failures().collect();

        assert_eq!(failures.len(), 1);
        let (index, failure) = failures[0];
        assert_eq!(*index, TileIndex::new(0, 1, 1));
        assert_eq!(failure.url(), "http://t/1/0/1");
        assert_eq!(failure.status(), Some(404));
        assert_eq!(failure.to_string(), "Failed loading http://t/1/0/1 with code 404");
    }

    #[test]
    fn test_image_path() {
        let hit = TileOutcome::CacheHit(PathBuf::from("/a.jpg"));
        assert_eq!(hit.image_path(), Some(Path::new("/a.jpg")));
        assert_eq!(TileOutcome::Cancelled.image_path(), None);
    }
}
