//! modclean - find, size and delete node_modules directories.
//!
//! Usage:
//!   modclean [PATH]                 Scan PATH (default: current directory)
//!   modclean --target target PATH   Look for `target` directories instead
//!   modclean -j 8 PATH              Allow 8 deletions at once
//!   modclean --help                 Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use modclean_cli::{DialoguerPrompter, Sweeper};
use modclean_core::{DEFAULT_DELETE_CONCURRENCY, DEFAULT_PAGE_SIZE, DEFAULT_TARGET_NAME, SweepConfig};

#[derive(Parser)]
#[command(
    name = "modclean",
    version,
    about = "Find, size and delete node_modules directories",
    long_about = "modclean walks a directory tree, lists every node_modules directory \
                  with its size, and deletes the ones you pick.\n\n\
                  Matched directories are never descended into, so nested \
                  node_modules are counted as part of their parent."
)]
struct Cli {
    /// Root to scan (defaults to the current directory)
    path: Option<PathBuf>,

    /// Directory name to look for
    #[arg(short, long, default_value = DEFAULT_TARGET_NAME)]
    target: String,

    /// Maximum number of deletions in flight
    #[arg(short, long, default_value_t = DEFAULT_DELETE_CONCURRENCY)]
    jobs: usize,

    /// Maximum number of directories sized at once (0 = number of CPUs)
    #[arg(long, default_value_t = 0)]
    size_jobs: usize,

    /// Rows shown at once in the selection list
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Log discovery and deletion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("Error getting current directory")?,
    };

    let config = SweepConfig::builder()
        .root(root)
        .target_name(cli.target)
        .delete_concurrency(cli.jobs)
        .size_concurrency(cli.size_jobs)
        .page_size(cli.page_size)
        .build()
        .context("Invalid configuration")?;

    let mut sweeper = Sweeper::new(
        config,
        DialoguerPrompter::new(),
        std::io::stdout(),
        std::io::stderr(),
    );

    // Stopping early is not a failure; only walk and prompt errors exit non-zero.
    if let Err(e) = sweeper.run().await {
        // The sweeper already printed the error line.
        tracing::debug!(error = ?e, "sweep aborted");
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr log subscriber, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "modclean=debug,modclean_scan=debug,modclean_ops=debug,modclean_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
