//! StaticLayer CLI - Command-line interface
//!
//! Inspect layer catalogs and resolve tiles against them using the
//! StaticLayer library.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use staticlayer::config::ConfigFile;
use staticlayer::logging::{init_logging, LoggingGuard};
use tracing::debug;

use commands::catalog::CatalogArgs;
use commands::resolve::ResolveArgs;
use commands::select::SelectArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "staticlayer")]
#[command(version, about = "Pick and place static geo-referenced imagery onto map tiles", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.staticlayer/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a layer's catalog and list its images
    Catalog(CatalogArgs),
    /// Show the image that best fits an extent
    Select(SelectArgs),
    /// Fetch the texture for a tile and print its placement
    Resolve(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = commands::common::load_config(cli.config.as_deref())?;
    let _logging = setup_logging(&config, cli.verbose)?;
    debug!(
        config = ?cli.config,
        layers = config.layers.len(),
        timeout_secs = config.http.timeout_secs,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &config),
        Commands::Select(args) => commands::select::run(args, &config),
        Commands::Resolve(args) => commands::resolve::run(args, &config),
    }
}

fn setup_logging(config: &ConfigFile, verbose: bool) -> Result<LoggingGuard, CliError> {
    let level = if verbose { "debug" } else { "warn" };
    init_logging(&config.logging.directory, &config.logging.file, level)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}
