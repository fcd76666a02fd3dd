//! The `batchframe config` command group.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use batchframe_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show {
        /// Config file (defaults to ./batchframe.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default config file path
    Path,

    /// Write a default config file to the default path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { config } => {
            let path = config.unwrap_or_else(Config::default_path);
            let config = if path.exists() {
                Config::load_from(&path)?
            } else {
                tracing::warn!("{:?} does not exist, showing defaults", path);
                Config::default()
            };
            println!("{}", config.to_toml()?);
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }
        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            if path.exists() && !force {
                anyhow::bail!("{:?} already exists — pass --force to overwrite", path);
            }
            std::fs::write(&path, Config::default().to_toml()?)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
