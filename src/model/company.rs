use crate::model::founder::FounderEntity;
use serde::Deserialize;

/// One entry of the listing feed, exactly as deserialized
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCompany {
    pub name: Option<String>,
    pub batch: Option<String>,
    pub one_liner: Option<String>,
    pub slug: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
}

/// Identifying fields of a listed company
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRecord {
    /// Company name
    pub name: String,

    /// Cohort label (e.g. "W21")
    pub batch: String,

    /// One-line description
    pub short_description: String,

    /// URL-safe identifier used to build the detail-page URL
    pub slug: String,

    /// Public company website
    pub website: String,

    /// Listing-source URL for the company
    pub source_url: String,
}

impl From<RawCompany> for CompanyRecord {
    fn from(raw: RawCompany) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            batch: raw.batch.unwrap_or_default(),
            short_description: raw.one_liner.unwrap_or_default(),
            slug: raw.slug.unwrap_or_default(),
            website: raw.website.unwrap_or_default(),
            source_url: raw.url.unwrap_or_default(),
        }
    }
}

/// A company together with the founders found on its detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedCompany {
    pub company: CompanyRecord,
    pub founders: Vec<FounderEntity>,
}

impl EnrichedCompany {
    pub fn new(company: CompanyRecord, founders: Vec<FounderEntity>) -> Self {
        Self { company, founders }
    }

    /// Number of founders that carry a profile URL
    pub fn founders_with_profile(&self) -> usize {
        self.founders.iter().filter(|f| f.has_profile()).count()
    }
}

/// Outcome of enriching a batch of companies
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Successfully enriched companies, in listing order
    pub companies: Vec<EnrichedCompany>,

    /// Number of units that failed and were dropped
    pub errors: usize,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}
