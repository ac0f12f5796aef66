//! Configuration module for Sumi-Sweep
//!
//! Configuration is optional. Without a file the crawler identifies itself as
//! `SumiSweep/<version>` and writes `crawl_results.json` to the current
//! directory.
//!
//! # Example
//!
//! ```no_run
//! use sumi_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sweep.toml")).unwrap();
//! println!("User-Agent: {}", config.user_agent.header_value());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, UserAgentConfig, DEFAULT_RESULTS_PATH};

// Re-export parser functions
pub use parser::{load_config, parse_config, resolve_config};
