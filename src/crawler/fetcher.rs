//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for an enrichment run:
//! - Building the HTTP client with the configured client identifier
//! - Fetching and decoding the company listing (fatal on exhaustion)
//! - Fetching detail pages (non-200 and exhausted retries yield `None`)
//!
//! Every attempt acquires the shared [`FetchGate`] on its own, so a request
//! waiting out a backoff sleep does not hold a concurrency slot.

use crate::config::Config;
use crate::crawler::gate::FetchGate;
use crate::crawler::retry::{retry_with_backoff, RetryPolicy};
use crate::model::{CompanyRecord, RawCompany};
use crate::ScoutError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The run configuration (client identifier and timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.client_identifier.as_str())
        .timeout(config.fetch.timeout())
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the detail-page URL for a company slug
///
/// The base URL is treated as a directory, so both
/// `https://host/companies` and `https://host/companies/` work.
///
/// # Example
///
/// ```
/// use founder_scout::crawler::detail_page_url;
///
/// let url = detail_page_url("https://www.ycombinator.com/companies/", "airbnb").unwrap();
/// assert_eq!(url.as_str(), "https://www.ycombinator.com/companies/airbnb");
/// ```
pub fn detail_page_url(base_url: &str, slug: &str) -> Result<Url, ScoutError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(slug.trim_matches('/'))?)
}

/// Fetches the full company listing
///
/// Transport errors, non-2xx responses and undecodable bodies are all
/// retried. Once retries run out the error is returned; the caller cannot
/// proceed without a listing.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `gate` - Shared fetch gate
/// * `listing_url` - JSON endpoint returning an array of companies
/// * `policy` - Retry policy for the request
pub async fn fetch_all_companies(
    client: &Client,
    gate: &FetchGate,
    listing_url: &str,
    policy: &RetryPolicy,
) -> Result<Vec<CompanyRecord>, ScoutError> {
    tracing::info!("Fetching company list from {}", listing_url);

    let raw = retry_with_backoff(policy, "Listing fetch", || async move {
        let _permit = gate.acquire().await?;

        let response = client
            .get(listing_url)
            .send()
            .await
            .map_err(|source| ScoutError::Http {
                url: listing_url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::Status {
                url: listing_url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ScoutError::Http {
            url: listing_url.to_string(),
            source,
        })?;

        serde_json::from_str::<Vec<RawCompany>>(&body).map_err(|e| ScoutError::Decode {
            url: listing_url.to_string(),
            message: e.to_string(),
        })
    })
    .await?;

    let companies: Vec<CompanyRecord> = raw.into_iter().map(CompanyRecord::from).collect();
    tracing::info!("Retrieved {} companies from listing", companies.len());
    Ok(companies)
}

/// Fetches the markup of a company detail page
///
/// Only transport errors are retried. Any status other than 200 is logged
/// and treated as "no page". If every attempt fails the error is logged and
/// swallowed.
///
/// # Returns
///
/// * `Some(String)` - The page body
/// * `None` - No usable page for this company
pub async fn fetch_detail_page(
    client: &Client,
    gate: &FetchGate,
    base_url: &str,
    slug: &str,
    policy: &RetryPolicy,
) -> Option<String> {
    if slug.trim().is_empty() {
        tracing::warn!("Skipping detail page: company has no slug");
        return None;
    }

    let url = match detail_page_url(base_url, slug) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Cannot build detail URL for slug '{}': {}", slug, e);
            return None;
        }
    };
    let url_str = url.as_str();

    let result = retry_with_backoff(policy, url_str, || async move {
        let _permit = gate.acquire().await?;

        let response = client
            .get(url_str)
            .send()
            .await
            .map_err(|source| ScoutError::Http {
                url: url_str.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Failed to fetch {}: HTTP {}", url_str, status.as_u16());
            return Ok(None);
        }

        response
            .text()
            .await
            .map(Some)
            .map_err(|source| ScoutError::Http {
                url: url_str.to_string(),
                source,
            })
    })
    .await;

    match result {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Error fetching {}: {}", url_str, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_detail_page_url_with_trailing_slash() {
        let url = detail_page_url("https://www.ycombinator.com/companies/", "stripe").unwrap();
        assert_eq!(url.as_str(), "https://www.ycombinator.com/companies/stripe");
    }

    #[test]
    fn test_detail_page_url_without_trailing_slash() {
        let url = detail_page_url("https://www.ycombinator.com/companies", "stripe").unwrap();
        assert_eq!(url.as_str(), "https://www.ycombinator.com/companies/stripe");
    }

    #[test]
    fn test_detail_page_url_strips_slashes_from_slug() {
        let url = detail_page_url("http://127.0.0.1:8080/companies/", "/acme/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/companies/acme");
    }

    #[test]
    fn test_detail_page_url_invalid_base() {
        assert!(detail_page_url("not a url", "acme").is_err());
    }

    // HTTP behavior is covered with wiremock in tests/pipeline_tests.rs
}
