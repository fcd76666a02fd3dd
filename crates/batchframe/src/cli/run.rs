//! The `batchframe run` command.

use std::path::PathBuf;

use clap::Args;

use batchframe_core::{BatchProcessor, Config, RunSummary};

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Config file (defaults to ./batchframe.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of pool workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Execute the run command.
pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let path = args.config.clone().unwrap_or_else(Config::default_path);
    if !path.exists() {
        anyhow::bail!(
            "config file {:?} not found — generate one with `batchframe config init`",
            path
        );
    }
    let mut config = Config::load_from(&path)?;

    if let Some(workers) = args.workers {
        anyhow::ensure!(workers > 0, "--workers must be > 0");
        config.processing.workers = workers;
    }

    let summary = BatchProcessor::new(config).run().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Print a formatted summary table after a run.
fn print_summary(summary: &RunSummary) {
    let seconds = summary.elapsed_ms as f64 / 1000.0;
    let rate = if seconds > 0.0 {
        summary.processed as f64 / seconds
    } else {
        0.0
    };

    eprintln!();
    eprintln!("  ==============================");
    eprintln!("            Summary");
    eprintln!("  ==============================");
    eprintln!("    Discovered: {:>8}", summary.discovered);
    eprintln!("    Processed:  {:>8}", summary.processed);
    if summary.skipped() > 0 {
        eprintln!("    Skipped:    {:>8}", summary.skipped());
    }
    eprintln!("  ------------------------------");
    eprintln!("    Duration:   {:>7.1}s", seconds);
    eprintln!("    Rate:       {:>5.1} img/sec", rate);
    eprintln!("  ==============================");
}
