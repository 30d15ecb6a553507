//! Section-scoped name lists
//!
//! Founder names often appear as plain lines inside a "team" or "founders"
//! block without any profile link. Sections are found by class/id keywords
//! and by headings mentioning founders; every line inside them that looks
//! like a name becomes a name-only candidate.

use crate::extract::names::is_name_line;
use crate::model::FounderEntity;
use scraper::{ElementRef, Html};

/// Class/id substrings that mark a founder-ish section
const SECTION_KEYWORDS: &[&str] = &["founder", "team", "leadership", "about"];

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

fn has_section_attr(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    value
        .attr("class")
        .into_iter()
        .chain(value.attr("id"))
        .any(|attr| {
            let lower = attr.to_lowercase();
            SECTION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
}

fn is_founder_heading(element: &ElementRef<'_>) -> bool {
    HEADING_TAGS.contains(&element.value().name())
        && element
            .text()
            .collect::<String>()
            .to_lowercase()
            .contains("founder")
}

/// Finds candidate sections in document order
///
/// A heading mentioning founders contributes its parent container.
pub fn find_sections(document: &Html) -> Vec<ElementRef<'_>> {
    let mut sections = Vec::new();

    for element in document.root_element().descendants().filter_map(ElementRef::wrap) {
        if has_section_attr(&element) {
            sections.push(element);
        }

        if is_founder_heading(&element) {
            if let Some(container) = element.parent().and_then(ElementRef::wrap) {
                sections.push(container);
            }
        }
    }

    sections
}

/// Non-empty lines of a section, whitespace-normalized
fn section_lines<'a>(section: &ElementRef<'a>) -> impl Iterator<Item = String> + 'a {
    section
        .text()
        .flat_map(str::lines)
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
}

/// Extracts name-only founders from founder-ish sections
pub fn extract(document: &Html) -> Vec<FounderEntity> {
    let sections = find_sections(document);
    tracing::trace!("Found {} candidate founder sections", sections.len());

    sections
        .iter()
        .flat_map(|section| section_lines(section))
        .filter(|line| is_name_line(line))
        .map(FounderEntity::name_only)
        .collect()
}
