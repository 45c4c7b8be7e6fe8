//! Labels excluded from macro averaging.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Set of labels left out of the averaging label set.
///
/// Ignoring a label never removes a pair from the confusion counts: pairs
/// whose gold or predicted label is ignored still count towards the other
/// labels' predicted and gold totals. Only the ignored label's own term in the
/// macro averages is dropped, together with its gold occurrences in the
/// accuracy denominator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSet(BTreeSet<Label>);

impl IgnoreSet {
    /// An empty ignore set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `label` is ignored.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Add a label, returning `true` if it was not already present.
    pub fn insert(&mut self, label: impl Into<Label>) -> bool {
        self.0.insert(label.into())
    }

    /// Number of ignored labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no label is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the ignored labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }
}

impl<L: Into<Label>> FromIterator<L> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<L: Into<Label>> Extend<L> for IgnoreSet {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a IgnoreSet {
    type Item = &'a Label;
    type IntoIter = std::collections::btree_set::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_set_collect() {
        let ignore: IgnoreSet = ["PER", "ORG", "PER"].into_iter().collect();
        assert_eq!(ignore.len(), 2);
        assert!(ignore.contains("PER"));
        assert!(ignore.contains("ORG"));
        assert!(!ignore.contains("LOC"));
    }

    #[test]
    fn test_ignore_set_default_is_empty() {
        let ignore = IgnoreSet::default();
        assert!(ignore.is_empty());
        assert!(!ignore.contains("PER"));
    }

    #[test]
    fn test_ignore_set_extend() {
        let mut ignore = IgnoreSet::new();
        assert!(ignore.insert("LOC"));
        assert!(!ignore.insert("LOC"));
        ignore.extend(vec!["MISC".to_string()]);
        let names: Vec<&str> = ignore.iter().map(Label::as_str).collect();
        assert_eq!(names, vec!["LOC", "MISC"]);
    }
}
