use std::collections::HashSet;

/// A founder recovered from a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FounderEntity {
    /// Display name, trimmed
    pub name: String,

    /// Professional-network profile URL, empty when unknown
    pub profile_url: String,
}

impl FounderEntity {
    pub fn new(name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            profile_url: profile_url.into(),
        }
    }

    pub fn name_only(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    pub fn has_profile(&self) -> bool {
        !self.profile_url.is_empty()
    }

    /// Identity used for deduplication
    pub fn key(&self) -> String {
        dedup_key(&self.name)
    }
}

/// Case-insensitive, trim-insensitive identity of a founder name
pub fn dedup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ordered founder collection where the first occurrence of a name wins
///
/// Names that trim to empty are never stored.
#[derive(Debug, Default)]
pub struct FounderSet {
    seen: HashSet<String>,
    founders: Vec<FounderEntity>,
}

impl FounderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a founder unless its name is empty or already present
    ///
    /// Returns `true` when the founder was added.
    pub fn insert(&mut self, founder: FounderEntity) -> bool {
        let key = founder.key();
        if key.is_empty() || !self.seen.insert(key) {
            return false;
        }
        self.founders.push(founder);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(&dedup_key(name))
    }

    pub fn len(&self) -> usize {
        self.founders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.founders.is_empty()
    }

    pub fn into_vec(self) -> Vec<FounderEntity> {
        self.founders
    }
}

impl Extend<FounderEntity> for FounderSet {
    fn extend<I: IntoIterator<Item = FounderEntity>>(&mut self, iter: I) {
        for founder in iter {
            self.insert(founder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let founder = FounderEntity::new("  Jane Doe ", "");
        assert_eq!(founder.name, "Jane Doe");
        assert!(!founder.has_profile());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut set = FounderSet::new();
        assert!(set.insert(FounderEntity::new("Jane Doe", "https://linkedin.com/in/jane")));
        assert!(!set.insert(FounderEntity::name_only("JANE DOE")));
        assert!(!set.insert(FounderEntity::name_only(" jane doe ")));

        let founders = set.into_vec();
        assert_eq!(founders.len(), 1);
        assert_eq!(founders[0].profile_url, "https://linkedin.com/in/jane");
    }

    #[test]
    fn test_empty_names_discarded() {
        let mut set = FounderSet::new();
        assert!(!set.insert(FounderEntity::name_only("   ")));
        assert!(!set.insert(FounderEntity::name_only("")));
        assert!(set.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut set = FounderSet::new();
        set.extend([
            FounderEntity::name_only("Bob Stone"),
            FounderEntity::name_only("Alice Wong"),
            FounderEntity::name_only("bob stone"),
        ]);

        let names: Vec<_> = set.into_vec().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Bob Stone", "Alice Wong"]);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let mut set = FounderSet::new();
        set.insert(FounderEntity::name_only("Alice Wong"));
        assert!(set.contains("ALICE WONG "));
        assert!(!set.contains("Alice"));
    }
}
