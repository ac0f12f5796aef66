//! Sumi-Sweep main entry point
//!
//! This is the command-line interface for the Sumi-Sweep single-domain crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Sumi-Sweep: a single-domain breadth-first crawler
///
/// Sumi-Sweep honours the seed origin's robots.txt, visits every same-domain
/// page reachable from the seed, and writes title, canonical URL, description
/// and links for each page to a JSON file, which is then printed to stdout.
#[derive(Parser, Debug)]
#[command(name = "sumi-sweep")]
#[command(version)]
#[command(about = "A single-domain breadth-first crawler", long_about = None)]
#[command(after_help = "Results are written to crawl_results.json unless --output or the config \
file says otherwise.\nLogs go to stderr. RUST_LOG, when set, overrides -v and -q.")]
struct Cli {
    /// Absolute seed URL, including the scheme
    #[arg(value_name = "URL")]
    seed: Url,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write results here instead of crawl_results.json
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    sumi_sweep::run(cli.config.as_deref(), cli.output.as_deref(), cli.seed)
        .await
        .context("Crawl failed")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the results echo. `RUST_LOG`
/// takes precedence over the flags when set.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("sumi_sweep=info,warn"),
                1 => EnvFilter::new("sumi_sweep=debug,info"),
                2 => EnvFilter::new("sumi_sweep=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
