//! satgrid - slippy-map tile fetching and disk caching
//!
//! This library loads the square grid of Web Mercator tiles surrounding a
//! geographic point from any `{x}/{y}/{z}` tile server, keeping every tile in
//! a persistent per-source disk cache so later loads never touch the network
//! for tiles already on disk.
//!
//! - [`coord`]: latitude/longitude to tile grid conversions
//! - [`source`]: tile URL templates
//! - [`cache`]: cache directory layout and tile persistence
//! - [`provider`]: HTTP client abstraction
//! - [`loader`]: the tile loading session
//! - [`config`]: the user configuration file
//! - [`logging`]: tracing subscriber setup for binaries

pub mod cache;
pub mod config;
pub mod coord;
pub mod loader;
pub mod logging;
pub mod provider;
pub mod source;

/// Library version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
