use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};

use crate::{
    config::ConfigArgs,
    graph::start_generation,
    utils::{logging::enable_logging, runtime::single_thread_runtime},
};

#[derive(Parser, Debug)]
#[command(name = "activity-graph", version, long_about = None)]
#[command(about = "Renders a year of GitHub contributions as a calendar heatmap SVG")]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    #[arg(long, help = "Enable trace logging")]
    log: bool,
    #[arg(
        long,
        env = "ACTIVITY_GRAPH_LOG_DIR",
        help = "Also write daily rotated log files into this directory"
    )]
    log_dir: Option<PathBuf>,
}

/// Parses arguments, then fetches and renders the graph. Help and version requests exit the
/// process directly, every other problem is returned to the caller.
pub fn run_cli() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(args.log_dir.as_deref(), logging_level)?;

    let config = args.config.resolve()?;

    let outcome = single_thread_runtime()
        .context("Failed to start the runtime")?
        .block_on(start_generation(&config))?;

    info!(
        "Rendered {} weeks with {} contributions",
        outcome.weeks, outcome.contributions
    );
    println!("Graph written to {}", outcome.output.display());
    if let Some(snapshot) = outcome.snapshot {
        println!("Monthly snapshot written to {}", snapshot.display());
    }
    Ok(())
}
