//! Enrichment coordinator - fans per-company work out over a bounded pool
//!
//! Each company is one independent unit: fetch its detail page, extract the
//! founders, and pair them with the company record. Units run concurrently
//! (bounded by the configured concurrency) on their own tasks, and a failing
//! unit is counted and dropped without affecting its siblings.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_all_companies, fetch_detail_page};
use crate::crawler::gate::FetchGate;
use crate::crawler::retry::RetryPolicy;
use crate::extract::extract_founders;
use crate::model::{BatchResult, CompanyRecord, EnrichedCompany};
use crate::ScoutError;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;

/// Receives progress updates while units complete
pub trait ProgressReporter: Send + Sync {
    /// Called after each unit finishes, successfully or not
    fn unit_done(&self, completed: usize, total: usize);

    /// Called once after the last unit
    fn finish(&self);
}

/// No-op progress reporter
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn unit_done(&self, _completed: usize, _total: usize) {}
    fn finish(&self) {}
}

/// Result of one unit of work
#[derive(Debug)]
pub enum UnitOutcome {
    Enriched(EnrichedCompany),
    Failed(ScoutError),
}

/// Runs one unit per company with at most `concurrency` in flight
///
/// Each unit is spawned as its own task, so an error or a panic inside a unit
/// only marks that unit as failed. Failed units are logged with their index
/// and counted; successful ones are returned in input order.
///
/// # Arguments
///
/// * `companies` - Records to process
/// * `concurrency` - Maximum units in flight (at least 1)
/// * `progress` - Progress sink
/// * `unit` - Builds the work for the company at a given index
pub async fn run_units<F, Fut>(
    companies: Vec<CompanyRecord>,
    concurrency: usize,
    progress: &dyn ProgressReporter,
    unit: F,
) -> BatchResult
where
    F: Fn(usize, CompanyRecord) -> Fut,
    Fut: Future<Output = Result<EnrichedCompany, ScoutError>> + Send + 'static,
{
    let total = companies.len();

    let mut outcomes = stream::iter(companies.into_iter().enumerate())
        .map(|(index, company)| {
            let handle = tokio::spawn(unit(index, company));
            async move {
                let outcome = match handle.await {
                    Ok(Ok(enriched)) => UnitOutcome::Enriched(enriched),
                    Ok(Err(e)) => UnitOutcome::Failed(e),
                    Err(join_error) => UnitOutcome::Failed(ScoutError::Task {
                        index,
                        message: join_error.to_string(),
                    }),
                };
                (index, outcome)
            }
        })
        .buffer_unordered(concurrency.max(1));

    let mut enriched = Vec::with_capacity(total);
    let mut errors = 0;
    let mut completed = 0;

    while let Some((index, outcome)) = outcomes.next().await {
        completed += 1;
        progress.unit_done(completed, total);

        match outcome {
            UnitOutcome::Enriched(company) => enriched.push((index, company)),
            UnitOutcome::Failed(e) => {
                tracing::warn!("Error enriching company {}: {}", index, e);
                errors += 1;
            }
        }
    }
    progress.finish();

    if errors > 0 {
        tracing::warn!("Encountered {} errors during enrichment", errors);
    }

    // Completion order is arbitrary; restore listing order
    enriched.sort_by_key(|(index, _)| *index);

    BatchResult {
        companies: enriched.into_iter().map(|(_, company)| company).collect(),
        errors,
    }
}

/// Owns the HTTP client and the shared fetch gate for one run
///
/// Cloning is cheap: clones share the same client and gate.
#[derive(Clone)]
pub struct Enricher {
    client: Client,
    gate: Arc<FetchGate>,
    listing_url: Arc<str>,
    detail_base_url: Arc<str>,
    listing_policy: RetryPolicy,
    detail_policy: RetryPolicy,
    concurrency: usize,
}

impl Enricher {
    /// Creates an enricher from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Enricher)` - Client and gate are ready
    /// * `Err(ScoutError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, ScoutError> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates an enricher around an existing client
    pub fn with_client(client: Client, config: &Config) -> Self {
        let listing_policy = RetryPolicy::from_config(&config.fetch);
        let detail_policy = listing_policy.with_max_retries(config.fetch.detail_max_retries);

        Self {
            client,
            gate: Arc::new(FetchGate::from_config(&config.fetch)),
            listing_url: Arc::from(config.source.listing_url.as_str()),
            detail_base_url: Arc::from(config.source.detail_base_url.as_str()),
            listing_policy,
            detail_policy,
            concurrency: config.fetch.concurrency,
        }
    }

    /// The gate shared by every request of this run
    pub fn gate(&self) -> &FetchGate {
        &self.gate
    }

    /// Fetches the full listing; failure here is fatal for the run
    pub async fn fetch_listing(&self) -> Result<Vec<CompanyRecord>, ScoutError> {
        fetch_all_companies(&self.client, &self.gate, &self.listing_url, &self.listing_policy)
            .await
    }

    /// Enriches a single company
    ///
    /// A missing detail page is not an error: the company is returned with
    /// an empty founder list.
    pub async fn enrich_company(
        &self,
        company: CompanyRecord,
    ) -> Result<EnrichedCompany, ScoutError> {
        let page = fetch_detail_page(
            &self.client,
            &self.gate,
            &self.detail_base_url,
            &company.slug,
            &self.detail_policy,
        )
        .await;

        let founders = match page {
            Some(html) => extract_founders(&html, &company.name),
            None => Vec::new(),
        };

        tracing::debug!("{}: {} founders", company.name, founders.len());
        Ok(EnrichedCompany::new(company, founders))
    }

    /// Enriches every company concurrently
    ///
    /// # Returns
    ///
    /// The successfully enriched companies in listing order, plus the number
    /// of units that failed.
    pub async fn enrich_all(
        &self,
        companies: Vec<CompanyRecord>,
        progress: &dyn ProgressReporter,
    ) -> BatchResult {
        tracing::info!(
            "Enriching {} companies (concurrency {}, gate {} slots / {:?} spacing)",
            companies.len(),
            self.concurrency,
            self.gate.max_concurrent(),
            self.gate.min_interval()
        );

        let enricher = self.clone();
        run_units(companies, self.concurrency, progress, move |_, company| {
            let enricher = enricher.clone();
            async move { enricher.enrich_company(company).await }
        })
        .await
    }
}
