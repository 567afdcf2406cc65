//! Known performers and wildcard expansion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Performance;

/// Performer-list entry meaning "every known performer". Case-sensitive.
pub const WILDCARD: &str = "All";

/// Every performer seen across an input batch, excluding [`WILDCARD`].
///
/// Ordered, so wildcard expansion is stable for the life of the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerSet {
    performers: BTreeSet<String>,
}

impl PerformerSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every performer named by `performances`.
    pub fn from_performances(performances: &[Performance]) -> Self {
        let performers = performances
            .iter()
            .flat_map(|p| p.performers.iter())
            .filter(|name| name.as_str() != WILDCARD)
            .cloned()
            .collect();
        Self { performers }
    }

    /// Adds a performer. The wildcard token is ignored.
    pub fn insert(&mut self, performer: impl Into<String>) {
        let performer = performer.into();
        if performer != WILDCARD {
            self.performers.insert(performer);
        }
    }

    /// Expands a performer list.
    ///
    /// If `performers` contains [`WILDCARD`], returns every known performer;
    /// otherwise returns `performers` unchanged.
    pub fn resolve<'a>(&'a self, performers: &'a [String]) -> Vec<&'a str> {
        if performers.iter().any(|p| p == WILDCARD) {
            self.performers.iter().map(String::as_str).collect()
        } else {
            performers.iter().map(String::as_str).collect()
        }
    }

    pub fn contains(&self, performer: &str) -> bool {
        self.performers.contains(performer)
    }

    pub fn len(&self) -> usize {
        self.performers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.performers.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PerformerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for performer in iter {
            set.insert(performer);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_performances_excludes_wildcard() {
        let performances = vec![
            Performance::new("A").with_performers(["x", "y"]),
            Performance::new("B").with_performers(["y", "z"]),
            Performance::new("Finale").with_performers([WILDCARD]),
        ];
        let set = PerformerSet::from_performances(&performances);

        assert_eq!(set.len(), 3);
        assert!(set.contains("x"));
        assert!(!set.contains(WILDCARD));
    }

    #[test]
    fn test_resolve_wildcard_expands_to_full_set() {
        let set: PerformerSet = ["z", "x", "y"].into_iter().collect();
        let list = names(&["x", WILDCARD]);

        assert_eq!(set.resolve(&list), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_resolve_plain_list_unchanged() {
        let set: PerformerSet = ["x", "y"].into_iter().collect();
        let list = names(&["y", "q", "y"]);

        assert_eq!(set.resolve(&list), vec!["y", "q", "y"]);
    }

    #[test]
    fn test_resolve_wildcard_is_case_sensitive() {
        let set: PerformerSet = ["x"].into_iter().collect();
        let list = names(&["all"]);

        assert_eq!(set.resolve(&list), vec!["all"]);
    }

    #[test]
    fn test_resolve_empty() {
        let set: PerformerSet = ["x"].into_iter().collect();
        assert!(set.resolve(&[]).is_empty());
    }
}
