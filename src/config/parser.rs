use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
///
/// Missing sections and keys fall back to their defaults.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so runs can be matched to the settings they used.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[fetch]
requests-per-second = 5.0
max-concurrent = 8
concurrency = 16
max-retries = 4
detail-max-retries = 1

[source]
listing-url = "https://example.com/all.json"
detail-base-url = "https://example.com/companies/"

[user-agent]
client-identifier = "TestScout/1.0"

[output]
directory = "./out"
file-prefix = "startups"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.requests_per_second, 5.0);
        assert_eq!(config.fetch.max_concurrent, 8);
        assert_eq!(config.fetch.concurrency, 16);
        assert_eq!(config.fetch.max_retries, 4);
        assert_eq!(config.fetch.detail_max_retries, 1);
        assert_eq!(config.source.listing_url, "https://example.com/all.json");
        assert_eq!(config.user_agent.client_identifier, "TestScout/1.0");
        assert_eq!(config.output.file_prefix, "startups");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.fetch.requests_per_second, 10.0);
        assert_eq!(config.fetch.max_concurrent, 20);
        assert_eq!(config.fetch.concurrency, 20);
        assert_eq!(config.fetch.max_retries, 3);
        assert_eq!(config.fetch.detail_max_retries, 2);
        assert_eq!(config.fetch.base_delay_ms, 1000);
        assert_eq!(config.fetch.max_jitter_ms, 500);
        assert_eq!(
            config.source.listing_url,
            "https://yc-oss.github.io/api/companies/all.json"
        );
        assert_eq!(
            config.user_agent.client_identifier,
            "Mozilla/5.0 (compatible; YC-Scraper/1.0)"
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[fetch]\nmax-retries = 7\n").unwrap();
        assert_eq!(config.fetch.max_retries, 7);
        assert_eq!(config.fetch.max_concurrent, 20);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/scout.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[fetch]\nmax-concurrent = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
