//! Session construction errors.

use thiserror::Error;

use crate::cache::CacheError;
use crate::coord::CoordError;
use crate::provider::ProviderError;
use crate::source::SourceError;

/// Errors that prevent a loading session from being created.
///
/// Per-tile failures during `start` are never surfaced here; they end up in
/// the [`LoadReport`](super::LoadReport).
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The tile source template is unusable.
    #[error("Invalid tile source: {0}")]
    Source(#[from] SourceError),

    /// Latitude, longitude or zoom outside the projection domain.
    #[error("Invalid view: {0}")]
    Coord(#[from] CoordError),

    /// The cache directory could not be created.
    #[error("Cache unavailable: {0}")]
    Cache(#[from] CacheError),

    /// The HTTP client could not be created.
    #[error("HTTP client unavailable: {0}")]
    Provider(#[from] ProviderError),

    /// The fetch worker pool could not be started.
    #[error("Failed to start fetch workers: {0}")]
    Workers(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coord_error() {
        let err: LoaderError = CoordError::InvalidZoom(40).into();
        assert!(matches!(err, LoaderError::Coord(CoordError::InvalidZoom(40))));
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_from_source_error() {
        let err: LoaderError = SourceError::Empty.into();
        assert!(err.to_string().starts_with("Invalid tile source"));
    }
}
