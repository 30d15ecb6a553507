use serde::Deserialize;
use std::time::Duration;

/// Public listing of every company, as a JSON array
pub const DEFAULT_LISTING_URL: &str = "https://yc-oss.github.io/api/companies/all.json";

/// Base URL that company slugs are appended to
pub const DEFAULT_DETAIL_BASE_URL: &str = "https://www.ycombinator.com/companies/";

/// Client identifier sent with every detail-page request
pub const DEFAULT_CLIENT_IDENTIFIER: &str = "Mozilla/5.0 (compatible; YC-Scraper/1.0)";

/// Main configuration structure for Founder-Scout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub source: SourceConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Request pacing, retry and concurrency settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Global request starts allowed per second
    #[serde(rename = "requests-per-second")]
    pub requests_per_second: f64,

    /// Maximum requests in flight through the fetch gate
    #[serde(rename = "max-concurrent")]
    pub max_concurrent: usize,

    /// Maximum enrichment units running at once
    pub concurrency: usize,

    /// Retries for the listing request
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Retries for each detail-page request
    #[serde(rename = "detail-max-retries")]
    pub detail_max_retries: u32,

    /// Base backoff delay (milliseconds), doubled on every attempt
    #[serde(rename = "base-delay-ms")]
    pub base_delay_ms: u64,

    /// Upper bound of the random jitter added to each backoff (milliseconds)
    #[serde(rename = "max-jitter-ms")]
    pub max_jitter_ms: u64,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10.0,
            max_concurrent: 20,
            concurrency: 20,
            max_retries: 3,
            detail_max_retries: 2,
            base_delay_ms: 1000,
            max_jitter_ms: 500,
            timeout_secs: 30,
        }
    }
}

impl FetchConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_jitter(&self) -> Duration {
        Duration::from_millis(self.max_jitter_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Upstream endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON listing of all companies
    #[serde(rename = "listing-url")]
    pub listing_url: String,

    /// Detail pages live at `<detail-base-url><slug>`
    #[serde(rename = "detail-base-url")]
    pub detail_base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            detail_base_url: DEFAULT_DETAIL_BASE_URL.to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Value of the `User-Agent` header
    #[serde(rename = "client-identifier")]
    pub client_identifier: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_identifier: DEFAULT_CLIENT_IDENTIFIER.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated CSV files when `--output` is not given
    pub directory: String,

    /// File name prefix, followed by a timestamp
    #[serde(rename = "file-prefix")]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_prefix: "yc_startups".to_string(),
        }
    }
}
