//! Labels and gold/predicted label pairs.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque class label.
///
/// Labels are compared and ordered by their string value. The set of labels
/// taking part in an evaluation is discovered from the data, never declared
/// up front.
///
/// # Example
///
/// ```rust
/// use labelscore_core::Label;
///
/// let per = Label::new("PER");
/// assert_eq!(per.as_str(), "PER");
/// assert_eq!(per, Label::from("PER"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Create a label from anything string-like.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The label's string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Label {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&Label> for Label {
    fn from(value: &Label) -> Self {
        value.clone()
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single evaluated instance: the gold (reference) label and the label a
/// model predicted for it.
///
/// Pairs carry no identity beyond their two labels; duplicates are meaningful
/// and are counted individually.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledPair {
    /// Ground-truth label.
    pub gold: Label,
    /// Label assigned by the model.
    pub predicted: Label,
}

impl LabeledPair {
    /// Create a new pair.
    #[must_use]
    pub fn new(gold: impl Into<Label>, predicted: impl Into<Label>) -> Self {
        Self {
            gold: gold.into(),
            predicted: predicted.into(),
        }
    }

    /// Whether the prediction matches the gold label.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.gold == self.predicted
    }
}

impl<G, P> From<(G, P)> for LabeledPair
where
    G: Into<Label>,
    P: Into<Label>,
{
    fn from((gold, predicted): (G, P)) -> Self {
        Self::new(gold, predicted)
    }
}

impl fmt::Display for LabeledPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.gold, self.predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ordering() {
        let mut labels = vec![Label::new("PER"), Label::new("LOC"), Label::new("ORG")];
        labels.sort();
        let names: Vec<&str> = labels.iter().map(Label::as_str).collect();
        assert_eq!(names, vec!["LOC", "ORG", "PER"]);
    }

    #[test]
    fn test_label_borrow_lookup() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Label::new("PER"), 3usize);
        assert_eq!(map.get("PER"), Some(&3));
        assert_eq!(map.get("ORG"), None);
    }

    #[test]
    fn test_pair_from_tuple() {
        let pair: LabeledPair = ("PER", "ORG").into();
        assert_eq!(pair.gold.as_str(), "PER");
        assert_eq!(pair.predicted.as_str(), "ORG");
        assert!(!pair.is_correct());
        assert!(LabeledPair::new("LOC", "LOC").is_correct());
    }

    #[test]
    fn test_pair_serialization() {
        let pair = LabeledPair::new("PER", "LOC");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"gold":"PER","predicted":"LOC"}"#);
        let restored: LabeledPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, restored);
    }
}
