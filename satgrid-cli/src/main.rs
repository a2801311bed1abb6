//! satgrid CLI - Command-line interface
//!
//! Loads and caches the slippy-map tiles around a point, and inspects the
//! tile cache and configuration.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use satgrid::logging::{default_log_dir, default_log_file, init_logging};

use commands::cache::CacheAction;
use commands::config::ConfigCommands;
use commands::load::LoadArgs;
use commands::locate::LocateArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "satgrid")]
#[command(version, about = "Fetch and cache slippy-map tiles around a point", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.satgrid/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the tile grid around a point into the cache
    Load(LoadArgs),

    /// Show the tile containing a point, without fetching anything
    Locate(LocateArgs),

    /// Inspect the tile cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Config commands must work even when the file itself is invalid
    if let Commands::Config { command } = cli.command {
        return commands::config::run(command, cli.config.as_deref());
    }

    let config = commands::common::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Load(args) => {
            let level = if cli.verbose { "debug" } else { "info" };
            let _guard = init_logging(&default_log_dir(), default_log_file(), level)
                .map_err(|e| CliError::LoggingInit(e.to_string()))?;
            tracing::debug!(version = satgrid::VERSION, "satgrid starting");

            commands::load::run(args, &config)
        }
        Commands::Locate(args) => commands::locate::run(args, &config),
        Commands::Cache { action } => commands::cache::run(action, &config),
        Commands::Config { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_load_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "satgrid", "load", "--lat", "-33.86", "--lon", "151.21", "--zoom", "15", "--blocks",
            "1",
        ])
        .unwrap();

        match cli.command {
            Commands::Load(args) => {
                assert_eq!(args.lat, Some(-33.86));
                assert_eq!(args.zoom, Some(15));
                assert_eq!(args.blocks, Some(1));
                assert!(args.source.is_none());
            }
            _ => panic!("expected load command"),
        }
    }

    #[test]
    fn test_parse_cache_stats_with_global_config() {
        let cli = Cli::try_parse_from([
            "satgrid",
            "cache",
            "stats",
            "--source",
            "http://t/{z}/{x}/{y}",
            "--config",
            "/tmp/satgrid.ini",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/satgrid.ini")));
        assert!(matches!(
            cli.command,
            Commands::Cache {
                action: CacheAction::Stats { source: Some(_), .. }
            }
        ));
    }

    #[test]
    fn test_config_path_with_invalid_config_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[view]\nzoom = 40\n").unwrap();
        let path_arg = path.to_string_lossy().to_string();

        let cli =
            Cli::try_parse_from(["satgrid", "--config", &path_arg, "config", "path"]).unwrap();
        assert!(run(cli).is_ok());

        let cli = Cli::try_parse_from(["satgrid", "--config", &path_arg, "locate"]).unwrap();
        assert!(matches!(run(cli), Err(CliError::Config(_))));
    }

    #[test]
    fn test_zoom_out_of_u8_range_is_rejected() {
        assert!(Cli::try_parse_from(["satgrid", "locate", "--zoom", "300"]).is_err());
    }
}
