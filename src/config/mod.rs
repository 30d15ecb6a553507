//! Configuration module for Founder-Scout
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section and key has a built-in default, so an
//! empty file (or no file at all) yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use founder_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Requests per second: {}", config.fetch.requests_per_second);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, SourceConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
