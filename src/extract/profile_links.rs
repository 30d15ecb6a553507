//! Profile-link anchored extraction
//!
//! Every hyperlink to a professional-network profile is paired with the
//! nearest name-looking text around it, searching up to three enclosing
//! containers outward from the link.

use crate::extract::names::find_name_run;
use crate::model::FounderEntity;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Number of ancestor containers searched for a name
const MAX_ANCESTOR_DEPTH: usize = 3;

static PROFILE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(www\.)?linkedin\.com/in/[A-Za-z0-9_%\-]+/?(?:[?#]\S*)?$")
        .expect("profile URL regex")
});

/// Whether `href` is itself a professional-network profile URL
///
/// Redirect or tracking links that merely carry a profile URL are rejected.
pub fn is_profile_url(href: &str) -> bool {
    PROFILE_URL_RE.is_match(href)
}

/// Text of an element with text nodes separated by spaces
fn spaced_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

/// Searches the link's ancestors, nearest first, for a name
fn name_near_link(link: &ElementRef<'_>) -> Option<String> {
    link.ancestors()
        .filter_map(ElementRef::wrap)
        .take(MAX_ANCESTOR_DEPTH)
        .find_map(|container| find_name_run(&spaced_text(&container)))
}

/// Extracts founders anchored on profile links, in document order
pub fn extract(document: &Html) -> Vec<FounderEntity> {
    let mut founders = Vec::new();

    let Ok(link_selector) = Selector::parse("a[href]") else {
        return founders;
    };

    for link in document.select(&link_selector) {
        let Some(href) = link.value().attr("href").map(str::trim) else {
            continue;
        };

        if !is_profile_url(href) {
            continue;
        }

        match name_near_link(&link) {
            Some(name) => founders.push(FounderEntity::new(name, href)),
            None => tracing::trace!("No name found near profile link {}", href),
        }
    }

    founders
}
