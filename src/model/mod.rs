//! Data model for companies and the founders extracted for them
//!
//! Records flow one way: a [`RawCompany`] from the listing feed is normalized
//! into a [`CompanyRecord`], which is combined with extracted
//! [`FounderEntity`] values into an [`EnrichedCompany`]. A whole run is
//! summarized by a [`BatchResult`].

mod company;
mod founder;

pub use company::{BatchResult, CompanyRecord, EnrichedCompany, RawCompany};
pub use founder::{dedup_key, FounderEntity, FounderSet};
