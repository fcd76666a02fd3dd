//! batchframe CLI - batch resize a folder of photos into sequenced JPEGs.
//!
//! # Usage
//!
//! ```bash
//! # Generate a starter config, then edit the folder paths
//! batchframe config init
//!
//! # Run the pipeline
//! batchframe run
//!
//! # Machine-readable summary, custom config, more workers
//! batchframe run --config photos.toml --workers 8 --json
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// batchframe - batch resize a folder of photos into sequenced JPEGs.
#[derive(Parser, Debug)]
#[command(name = "batchframe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resize every image in the configured source folder
    Run(cli::run::RunArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln
    let config = match batchframe_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `batchframe config show`."
            );
            batchframe_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("batchframe v{}", batchframe_core::VERSION);

    match cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
