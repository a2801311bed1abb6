//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use satgrid::config::ConfigFileError;
use satgrid::coord::CoordError;
use satgrid::loader::LoaderError;
use satgrid::source::SourceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Invalid coordinates or zoom level
    Coord(CoordError),
    /// Invalid tile source template
    Source(SourceError),
    /// Failed to set up the tile loader
    Loader(LoaderError),
    /// Failed to read cache statistics
    CacheStats(String),
    /// Failed to install the interrupt handler
    Signal(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Coord(_) | CliError::Loader(LoaderError::Coord(_)) => {
                eprintln!();
                eprintln!("Valid ranges:");
                eprintln!("  latitude:  -85.0511 to 85.0511");
                eprintln!("  longitude: -180 to 180");
                eprintln!("  zoom:      0 to 31");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Use 'satgrid config path' to locate the configuration file.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Coord(e) => write!(f, "{}", e),
            CliError::Source(e) => write!(f, "Invalid tile source: {}", e),
            CliError::Loader(e) => write!(f, "Failed to set up tile loader: {}", e),
            CliError::CacheStats(msg) => write!(f, "Failed to read cache: {}", msg),
            CliError::Signal(msg) => write!(f, "Failed to set signal handler: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Coord(e) => Some(e),
            CliError::Source(e) => Some(e),
            CliError::Loader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coord(e)
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        CliError::Source(e)
    }
}

impl From<LoaderError> for CliError {
    fn from(e: LoaderError) -> Self {
        CliError::Loader(e)
    }
}
