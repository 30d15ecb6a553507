//! Run statistics
//!
//! This module computes founder and profile coverage for an enrichment run
//! and prints the end-of-run summary.

use crate::model::BatchResult;
use std::path::Path;
use std::time::Duration;

/// Coverage summary of an enrichment run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    /// Companies successfully enriched
    pub total_companies: usize,

    /// Companies with at least one founder
    pub companies_with_founders: usize,

    /// Founders across all companies
    pub total_founders: usize,

    /// Founders that carry a profile URL
    pub founders_with_profile: usize,

    /// Units that failed and were dropped
    pub errors: usize,
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

impl BatchSummary {
    /// Computes the summary of a batch
    pub fn from_batch(batch: &BatchResult) -> Self {
        let companies = &batch.companies;

        Self {
            total_companies: companies.len(),
            companies_with_founders: companies.iter().filter(|c| !c.founders.is_empty()).count(),
            total_founders: companies.iter().map(|c| c.founders.len()).sum(),
            founders_with_profile: companies.iter().map(|c| c.founders_with_profile()).sum(),
            errors: batch.errors,
        }
    }

    /// Share of companies with at least one founder, in percent
    pub fn founder_coverage_pct(&self) -> f64 {
        percentage(self.companies_with_founders, self.total_companies)
    }

    /// Share of founders with a profile URL, in percent
    pub fn profile_coverage_pct(&self) -> f64 {
        percentage(self.founders_with_profile, self.total_founders)
    }
}

/// Prints the end-of-run summary to stdout
pub fn print_summary(summary: &BatchSummary, elapsed: Duration, output_path: &Path) {
    let rule = "=".repeat(50);

    println!();
    println!("{}", rule);
    println!("ENRICHMENT COMPLETE");
    println!("{}", rule);
    println!("Time elapsed: {:.1}s", elapsed.as_secs_f64());
    println!("Companies enriched: {}", summary.total_companies);
    println!(
        "Companies with founders: {} ({:.1}%)",
        summary.companies_with_founders,
        summary.founder_coverage_pct()
    );
    println!("Total founders found: {}", summary.total_founders);
    println!(
        "Founders with LinkedIn: {} ({:.1}%)",
        summary.founders_with_profile,
        summary.profile_coverage_pct()
    );
    if summary.errors > 0 {
        println!("Failed companies: {}", summary.errors);
    }
    println!("Output file: {}", output_path.display());
    println!("{}", rule);
}
