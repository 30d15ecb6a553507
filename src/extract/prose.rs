//! Prose fallback: "Founded by X and Y" sentences

use crate::model::FounderEntity;
use regex::Regex;
use std::sync::LazyLock;

static FOUNDED_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Tokens never span a line break, so a name stays within one text block
    let name = r"[A-Z][\w'’\-]*(?:[ \t]+[A-Z][\w'’\-]*){1,3}";
    Regex::new(&format!(
        r"[Ff]ounded\s+(?:by|in\s+\d{{4}}\s+by)\s+({name}(?:[ \t]+and[ \t]+{name})*)"
    ))
    .expect("founded-by regex")
});

static AND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+and[ \t]+").expect("name separator regex"));

/// Extracts names from "Founded by ..." phrases in plain text
///
/// # Example
///
/// ```
/// use founder_scout::extract::founded_by_names;
///
/// let names = founded_by_names("Founded in 2012 by Ada Lovelace and Charles Babbage.");
/// assert_eq!(names, vec!["Ada Lovelace", "Charles Babbage"]);
/// ```
pub fn founded_by_names(text: &str) -> Vec<String> {
    FOUNDED_BY_RE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .flat_map(|list| AND_RE.split(list.as_str()))
        .map(|name| name.trim_end_matches(['.', ',']).trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Extracts name-only founders from the page's full text
pub fn extract(full_text: &str) -> Vec<FounderEntity> {
    founded_by_names(full_text)
        .into_iter()
        .map(FounderEntity::name_only)
        .collect()
}
