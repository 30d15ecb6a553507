//! Founder extraction engine
//!
//! Detail pages are neither versioned nor stable, so founders are recovered
//! by several independent strategies of decreasing precision:
//!
//! 1. **Profile links** - each professional-network profile link is paired
//!    with the nearest name-looking text around it.
//! 2. **Sections** - name-looking lines inside founder/team/leadership/about
//!    blocks, without profile URLs.
//! 3. **Prose** - "Founded by X and Y" sentences, only when the first two
//!    strategies found nothing.
//!
//! Results are merged in that order. The first occurrence of a name
//! (case-insensitive, trimmed) wins, so a profile-linked founder keeps its
//! URL even when the same name shows up again in a section.

mod names;
mod profile_links;
mod prose;
mod sections;

pub use names::{find_name_run, is_name_line};
pub use profile_links::is_profile_url;
pub use prose::founded_by_names;

use crate::model::{dedup_key, FounderEntity, FounderSet};
use scraper::Html;

/// Visible text of a document, one whitespace-collapsed text node per line
fn document_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(|node| node.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts the founders listed on a company detail page
///
/// Candidates equal to the company's own name are discarded. The result
/// never contains an empty name or two names that differ only in case or
/// surrounding whitespace.
///
/// # Arguments
///
/// * `html` - Detail page markup
/// * `company_name` - Name of the company the page belongs to
///
/// # Example
///
/// ```
/// use founder_scout::extract_founders;
///
/// let html = r#"<div>Jane Doe, CEO &amp; Co-founder
///     <a href="https://linkedin.com/in/janedoe">profile</a></div>"#;
/// let founders = extract_founders(html, "Acme");
///
/// assert_eq!(founders.len(), 1);
/// assert_eq!(founders[0].name, "Jane Doe");
/// assert_eq!(founders[0].profile_url, "https://linkedin.com/in/janedoe");
/// ```
pub fn extract_founders(html: &str, company_name: &str) -> Vec<FounderEntity> {
    let document = Html::parse_document(html);
    let company_key = dedup_key(company_name);
    let not_company = |founder: &FounderEntity| founder.key() != company_key;

    let mut founders = FounderSet::new();

    let linked = profile_links::extract(&document);
    tracing::trace!("{}: {} profile-link candidates", company_name, linked.len());
    founders.extend(linked.into_iter().filter(not_company));

    let listed = sections::extract(&document);
    tracing::trace!("{}: {} section candidates", company_name, listed.len());
    founders.extend(listed.into_iter().filter(not_company));

    if founders.is_empty() {
        let prose = prose::extract(&document_text(&document));
        tracing::trace!("{}: {} prose candidates", company_name, prose.len());
        founders.extend(prose.into_iter().filter(not_company));
    }

    founders.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_invariants(founders: &[FounderEntity]) {
        let mut seen = HashSet::new();
        for founder in founders {
            assert!(!founder.name.trim().is_empty(), "empty founder name");
            assert!(
                seen.insert(founder.name.trim().to_lowercase()),
                "duplicate founder {}",
                founder.name
            );
        }
    }

    #[test]
    fn test_profile_link_in_container() {
        let html = r#"
            <html><body>
                <div class="card">
                    <span>Jane Doe, CEO &amp; Co-founder</span>
                    <a href="https://linkedin.com/in/janedoe">profile</a>
                </div>
            </body></html>
        "#;
        let founders = extract_founders(html, "Acme");

        assert_eq!(
            founders,
            vec![FounderEntity::new("Jane Doe", "https://linkedin.com/in/janedoe")]
        );
    }

    #[test]
    fn test_prose_fallback() {
        let html = "<html><body><p>Founded by John Smith and Alice Wong in 2019</p></body></html>";
        let founders = extract_founders(html, "Acme");

        assert_eq!(
            founders,
            vec![
                FounderEntity::name_only("John Smith"),
                FounderEntity::name_only("Alice Wong"),
            ]
        );
    }

    #[test]
    fn test_prose_name_stays_inside_its_element() {
        let html = "<html><body><p>Founded by Jane Doe</p><p>San Francisco</p></body></html>";
        assert_eq!(
            extract_founders(html, "Acme"),
            vec![FounderEntity::name_only("Jane Doe")]
        );

        let html = "<span>Founded by Jane Doe</span><span>Active Founders</span>";
        assert_eq!(
            extract_founders(html, "Acme"),
            vec![FounderEntity::name_only("Jane Doe")]
        );
    }

    #[test]
    fn test_prose_rejects_single_word() {
        let html = "<p>Founded by Google engineers in 2019</p>";
        assert!(extract_founders(html, "Acme").is_empty());
    }

    #[test]
    fn test_plain_text_page_uses_prose() {
        let founders = extract_founders("Founded by John Smith and Alice Wong in 2019", "Acme");
        assert_eq!(founders.len(), 2);
        assert!(founders.iter().all(|f| f.profile_url.is_empty()));
    }

    #[test]
    fn test_profile_link_wins_over_section_duplicate() {
        let html = r#"
            <div class="founders">
                <div>
                    <p>Jane Doe</p>
                    <a href="https://linkedin.com/in/janedoe">in</a>
                </div>
                <p>JANE DOE</p>
                <p>Bob Stone</p>
            </div>
        "#;
        let founders = extract_founders(html, "Acme");

        assert_eq!(founders.len(), 2);
        assert_eq!(founders[0].name, "Jane Doe");
        assert_eq!(founders[0].profile_url, "https://linkedin.com/in/janedoe");
        assert_eq!(founders[1], FounderEntity::name_only("Bob Stone"));
        assert_invariants(&founders);
    }

    #[test]
    fn test_prose_skipped_when_sections_match() {
        let html = r#"
            <div class="team"><p>Carol Diaz</p></div>
            <p>Founded by John Smith in 2019</p>
        "#;
        let founders = extract_founders(html, "Acme");

        assert_eq!(founders, vec![FounderEntity::name_only("Carol Diaz")]);
    }

    #[test]
    fn test_prose_skipped_when_profile_links_match() {
        let html = r#"
            <div><p>Jane Doe</p><a href="https://linkedin.com/in/jane">in</a></div>
            <p>Founded by John Smith in 2019</p>
        "#;
        let founders = extract_founders(html, "Acme");

        assert_eq!(founders.len(), 1);
        assert_eq!(founders[0].name, "Jane Doe");
    }

    #[test]
    fn test_company_name_is_not_a_founder() {
        let html = r#"
            <div class="about"><p>Acme Robotics</p><p>Dana Fox</p></div>
        "#;
        let founders = extract_founders(html, "Acme Robotics");

        assert_eq!(founders, vec![FounderEntity::name_only("Dana Fox")]);
    }

    #[test]
    fn test_nothing_found() {
        let html = "<html><body><p>We build rockets.</p></body></html>";
        assert!(extract_founders(html, "Acme").is_empty());
        assert!(extract_founders("", "Acme").is_empty());
    }

    #[test]
    fn test_duplicate_links_deduplicated() {
        let html = r#"
            <div><p>Jane Doe</p><a href="https://linkedin.com/in/jane">in</a></div>
            <div><p>jane doe</p><a href="https://linkedin.com/in/jane-2">in</a></div>
        "#;
        let founders = extract_founders(html, "Acme");

        assert_eq!(founders.len(), 1);
        assert_eq!(founders[0].profile_url, "https://linkedin.com/in/jane");
    }

    #[test]
    fn test_invariants_on_messy_page() {
        let html = r#"
            <header class="about-header"><h1>Acme</h1></header>
            <div id="founders">
                <h2>Founders</h2>
                <div>   Jane   Doe   </div>
                <div>Jane Doe</div>
                <div>Bob Stone</div>
                <div class="card">
                    <span>Bob Stone</span>
                    <a href="https://www.linkedin.com/in/bob/">LinkedIn</a>
                </div>
            </div>
            <div class="team">
                <p>Batch: W21</p>
                <p>Team Size: 4</p>
                <p>Bob  Stone</p>
            </div>
        "#;
        let founders = extract_founders(html, "Acme");

        assert_invariants(&founders);
        assert!(founders.iter().any(|f| f.name == "Jane Doe"));
        assert!(founders
            .iter()
            .any(|f| f.name == "Bob Stone" && f.profile_url == "https://www.linkedin.com/in/bob/"));
    }
}
