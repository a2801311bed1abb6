//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`cache`] - Cache inspection (stats)
//! - [`config`] - Configuration inspection (list, path)
//! - [`load`] - Load the tile grid around a point
//! - [`locate`] - Show tile geometry for a point

pub mod cache;
pub mod common;
pub mod config;
pub mod load;
pub mod locate;
