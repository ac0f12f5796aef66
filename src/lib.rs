//! Sumi-Sweep: a single-domain breadth-first crawler
//!
//! This crate fetches a site's robots.txt, walks every same-domain page reachable
//! from a seed URL in breadth-first order, extracts title, canonical URL,
//! description and links from each page, and writes the results as JSON.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Sweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Sumi-Sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

// Re-export commonly used types
pub use config::{resolve_config, Config};
pub use crawler::{crawl, Coordinator};
pub use output::emit_results;
pub use output::{CrawlResult, CrawlStats, PageRecord};

/// Runs a crawl end to end: resolve configuration, crawl, write and publish
///
/// # Arguments
///
/// * `config_path` - Optional TOML configuration file
/// * `results_path` - Optional override for the results file
/// * `seed` - The absolute URL to start from
pub async fn run(
    config_path: Option<&std::path::Path>,
    results_path: Option<&std::path::Path>,
    seed: ::url::Url,
) -> Result<CrawlResult> {
    let config = resolve_config(config_path, results_path)?;
    tracing::debug!("User-Agent: {}", config.user_agent.header_value());

    let result = crawl(&config, seed).await?;

    let handler =
        output::JsonOutputHandler::new(config.output.results_path.clone(), config.output.echo);
    emit_results(&handler, &result)?;

    Ok(result)
}
