//! Crawler module for company listing and detail-page retrieval
//!
//! This module contains the network side of an enrichment run:
//! - The shared fetch gate (global concurrency cap + request spacing)
//! - Retry with exponential backoff and jitter
//! - Listing and detail-page fetchers
//! - The enrichment coordinator that fans work out over a bounded pool

mod coordinator;
mod fetcher;
mod gate;
mod retry;

pub use coordinator::{run_units, Enricher, ProgressReporter, SilentProgress, UnitOutcome};
pub use fetcher::{build_http_client, detail_page_url, fetch_all_companies, fetch_detail_page};
pub use gate::{FetchGate, GatePermit};
pub use retry::{retry_with_backoff, RetryPolicy};
