//! Tile source URL templates.
//!
//! A tile source is a URL containing `{x}`, `{y}` and `{z}` placeholders, for
//! example `https://tile.openstreetmap.org/{z}/{x}/{y}.png`. Placeholders are
//! matched case-insensitively and every occurrence is substituted.

use std::fmt;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use thiserror::Error;

use crate::coord::TileIndex;

/// Errors that can occur when constructing a tile source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// The template is empty or whitespace only
    #[error("Tile source template is empty")]
    Empty,
}

/// Immutable URL template identifying where tile images are fetched from.
///
/// The template string doubles as the identity of the source for cache
/// partitioning, so two sources are equal exactly when their templates are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileSource {
    template: String,
}

impl TileSource {
    /// Creates a tile source from a URL template.
    ///
    /// A template without placeholders is accepted and resolves to the same
    /// URL for every tile.
    pub fn new(template: impl Into<String>) -> Result<Self, SourceError> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Self { template })
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Returns true if the template contains all three placeholders.
    pub fn has_all_placeholders(&self) -> bool {
        x_pattern().is_match(&self.template)
            && y_pattern().is_match(&self.template)
            && z_pattern().is_match(&self.template)
    }

    /// Substitutes the tile index into the template.
    ///
    /// `{x}`, `{y}` and `{z}` (any case, all occurrences) are replaced by the
    /// decimal column, row and zoom respectively.
    pub fn resolve(&self, index: &TileIndex) -> String {
        let url = x_pattern().replace_all(&self.template, NoExpand(&index.x.to_string()));
        let url = y_pattern().replace_all(&url, NoExpand(&index.y.to_string()));
        let url = z_pattern().replace_all(&url, NoExpand(&index.zoom.to_string()));
        url.into_owned()
    }
}

impl fmt::Display for TileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl std::str::FromStr for TileSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn x_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\{x\}").expect("valid placeholder pattern"))
}

fn y_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\{y\}").expect("valid placeholder pattern"))
}

fn z_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\{z\}").expect("valid placeholder pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_basic_template() {
        let source = TileSource::new("http://x/{z}/{x}/{y}.png").unwrap();
        let url = source.resolve(&TileIndex::new(3, 5, 2));
        assert_eq!(url, "http://x/2/3/5.png");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let source = TileSource::new("http://x/{Z}/{X}/{y}.png").unwrap();
        let url = source.resolve(&TileIndex::new(3, 5, 2));
        assert_eq!(url, "http://x/2/3/5.png");
    }

    #[test]
    fn test_resolve_replaces_all_occurrences() {
        let source = TileSource::new("http://{x}.tiles/{z}/{x}/{y}?row={Y}").unwrap();
        let url = source.resolve(&TileIndex::new(7, 9, 4));
        assert_eq!(url, "http://7.tiles/4/7/9?row=9");
    }

    #[test]
    fn test_resolve_without_placeholders() {
        let source = TileSource::new("http://example.com/fixed.png").unwrap();
        assert!(!source.has_all_placeholders());
        assert_eq!(
            source.resolve(&TileIndex::new(1, 2, 3)),
            "http://example.com/fixed.png"
        );
    }

    #[test]
    fn test_resolve_leaves_dollar_signs_alone() {
        let source = TileSource::new("http://x/$1/{z}/{x}/{y}").unwrap();
        assert_eq!(source.resolve(&TileIndex::new(0, 1, 1)), "http://x/$1/1/0/1");
    }

    #[test]
    fn test_empty_template_rejected() {
        assert_eq!(TileSource::new("").unwrap_err(), SourceError::Empty);
        assert_eq!(TileSource::new("   ").unwrap_err(), SourceError::Empty);
    }

    #[test]
    fn test_from_str_and_display() {
        let source: TileSource = "https://a/{z}/{x}/{y}.jpg".parse().unwrap();
        assert!(source.has_all_placeholders());
        assert_eq!(source.to_string(), "https://a/{z}/{x}/{y}.jpg");
    }
}
