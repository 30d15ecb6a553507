//! Founder-Scout: a startup directory enricher
//!
//! This crate retrieves a public listing of startup companies, fetches each
//! company's detail page under a shared rate limit, extracts founder names and
//! professional-network profile links from the markup, and exports the result
//! as a flat CSV table.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for Founder-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Fetch gate closed")]
    GateClosed,

    #[error("Unit {index} failed: {message}")]
    Task { index: usize, message: String },

    #[error("Interrupted by user")]
    Interrupted,
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

/// Result type alias for Founder-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Enricher, FetchGate, RetryPolicy};
pub use extract::extract_founders;
pub use model::{BatchResult, CompanyRecord, EnrichedCompany, FounderEntity};
