//! Confusion counts aggregated from gold/predicted label pairs.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use labelscore_core::{Label, LabeledPair};

/// Counts kept for a single label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    /// Pairs where gold = predicted = this label.
    pub true_positive: usize,
    /// Pairs predicted as this label.
    pub predicted_total: usize,
    /// Pairs whose gold label is this label.
    pub gold_total: usize,
}

/// Per-label counts and gold/predicted cell counts for a collection of pairs.
///
/// Every pair is counted: ignoring labels happens later, when metrics are
/// derived, and never removes a pair from these counts.
///
/// Counts can only be built from pairs, so the gold and predicted totals
/// always sum to [`total`](Self::total) and no label has more true positives
/// than predictions or gold occurrences. Serialization is one-way.
///
/// # Example
///
/// ```rust
/// use labelscore_analysis::ConfusionCounts;
/// use labelscore_core::LabeledPair;
///
/// let counts = ConfusionCounts::from_pairs(vec![
///     LabeledPair::new("PER", "PER"),
///     LabeledPair::new("PER", "ORG"),
/// ]);
///
/// assert_eq!(counts.total(), 2);
/// assert_eq!(counts.counts_for("PER").gold_total, 2);
/// assert_eq!(counts.counts_for("ORG").predicted_total, 1);
/// assert_eq!(counts.entry_count("PER", "ORG"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    labels: BTreeMap<Label, LabelCounts>,
    /// gold -> predicted -> count
    cells: BTreeMap<Label, BTreeMap<Label, usize>>,
    total: usize,
}

impl ConfusionCounts {
    /// Aggregate counts from pairs, consuming the iterator exactly once.
    pub fn from_pairs<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<LabeledPair>,
    {
        let mut counts = Self::default();
        for pair in pairs {
            counts.add(pair.into());
        }
        tracing::trace!(
            total = counts.total,
            labels = counts.labels.len(),
            "aggregated confusion counts"
        );
        counts
    }

    fn add(&mut self, pair: LabeledPair) {
        let correct = pair.is_correct();

        let gold = self.labels.entry(pair.gold.clone()).or_default();
        gold.gold_total += 1;
        if correct {
            gold.true_positive += 1;
        }
        self.labels.entry(pair.predicted.clone()).or_default().predicted_total += 1;

        *self
            .cells
            .entry(pair.gold)
            .or_default()
            .entry(pair.predicted)
            .or_insert(0) += 1;

        self.total += 1;
    }

    /// Total number of pairs.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether no pair was aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of correctly predicted pairs.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.labels.values().map(|c| c.true_positive).sum()
    }

    /// Every label seen as gold or predicted, in order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.keys()
    }

    /// Number of distinct labels seen.
    #[must_use]
    pub fn n_labels(&self) -> usize {
        self.labels.len()
    }

    /// Labels together with their counts, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &LabelCounts)> {
        self.labels.iter()
    }

    /// Counts for an observed label, `None` if the label never occurred.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&LabelCounts> {
        self.labels.get(label)
    }

    /// Counts for any label; labels that never occurred have all-zero counts.
    #[must_use]
    pub fn counts_for(&self, label: &str) -> LabelCounts {
        self.get(label).copied().unwrap_or_default()
    }

    /// Number of pairs with exactly this gold and predicted label.
    #[must_use]
    pub fn entry_count(&self, gold: &str, predicted: &str) -> usize {
        self.cells
            .get(gold)
            .and_then(|row| row.get(predicted))
            .copied()
            .unwrap_or(0)
    }

    /// Get a text representation (row = gold, col = predicted).
    pub fn to_string_table(&self) -> String {
        let labels: Vec<&Label> = self.labels.keys().collect();
        let mut s = String::new();

        // Header
        s.push_str("       ");
        for label in &labels {
            s.push_str(&format!("{:>8}", truncate(label.as_str(), 7)));
        }
        s.push('\n');

        // Rows
        for gold in &labels {
            s.push_str(&format!("{:>6} ", truncate(gold.as_str(), 6)));
            for predicted in &labels {
                s.push_str(&format!("{:>8}", self.entry_count(gold.as_str(), predicted.as_str())));
            }
            s.push('\n');
        }

        s
    }
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

impl<P: Into<LabeledPair>> FromIterator<P> for ConfusionCounts {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl fmt::Display for ConfusionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix (rows = gold, cols = predicted):")?;
        write!(f, "{}", self.to_string_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<LabeledPair> {
        raw.iter().map(|&(g, p)| LabeledPair::new(g, p)).collect()
    }

    #[test]
    fn test_counts() {
        let counts = ConfusionCounts::from_pairs(pairs(&[
            ("PER", "PER"),
            ("PER", "ORG"),
            ("ORG", "ORG"),
            ("LOC", "PER"),
        ]));

        assert_eq!(counts.total(), 4);
        assert_eq!(counts.correct(), 2);
        assert_eq!(
            counts.counts_for("PER"),
            LabelCounts { true_positive: 1, predicted_total: 2, gold_total: 2 }
        );
        assert_eq!(
            counts.counts_for("LOC"),
            LabelCounts { true_positive: 0, predicted_total: 0, gold_total: 1 }
        );
    }

    #[test]
    fn test_never_predicted_and_never_gold_labels() {
        let counts = ConfusionCounts::from_pairs(pairs(&[("PART", "ORG"), ("PER", "PUNC")]));

        let part = counts.get("PART").copied().unwrap();
        assert_eq!(part.predicted_total, 0);
        assert_eq!(part.gold_total, 1);

        let punc = counts.get("PUNC").copied().unwrap();
        assert_eq!(punc.gold_total, 0);
        assert_eq!(punc.predicted_total, 1);

        assert_eq!(counts.counts_for("MISC"), LabelCounts::default());
        assert!(counts.get("MISC").is_none());
    }

    #[test]
    fn test_totals_agree() {
        let counts: ConfusionCounts = pairs(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "A"),
            ("A", "A"),
            ("B", "B"),
        ])
        .into_iter()
        .collect();

        let gold: usize = counts.iter().map(|(_, c)| c.gold_total).sum();
        let predicted: usize = counts.iter().map(|(_, c)| c.predicted_total).sum();
        assert_eq!(gold, counts.total());
        assert_eq!(predicted, counts.total());
    }

    #[test]
    fn test_true_positives_bounded_by_totals() {
        let counts = ConfusionCounts::from_pairs(pairs(&[
            ("A", "A"),
            ("A", "A"),
            ("A", "B"),
            ("B", "A"),
            ("C", "C"),
            ("C", "B"),
        ]));

        for (label, c) in counts.iter() {
            assert!(c.true_positive <= c.predicted_total, "{label}: {c:?}");
            assert!(c.true_positive <= c.gold_total, "{label}: {c:?}");
        }
        let result = crate::EvaluationResult::from_counts(counts, Default::default());
        for score in [result.accuracy(), result.precision(), result.recall(), result.f1()] {
            let value = score.unwrap();
            assert!((0.0..=1.0).contains(&value), "{value}");
        }
    }

    #[test]
    fn test_serializes_counts() {
        let counts = ConfusionCounts::from_pairs(pairs(&[("A", "A"), ("A", "B")]));
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["labels"]["A"]["true_positive"], 1);
        assert_eq!(json["labels"]["B"]["predicted_total"], 1);
        assert_eq!(json["cells"]["A"]["B"], 1);
    }

    #[test]
    fn test_labels_sorted_and_deduplicated() {
        let counts = ConfusionCounts::from_pairs(pairs(&[("PER", "LOC"), ("LOC", "ORG"), ("PER", "PER")]));
        let labels: Vec<&str> = counts.labels().map(Label::as_str).collect();
        assert_eq!(labels, vec!["LOC", "ORG", "PER"]);
        assert_eq!(counts.n_labels(), 3);
    }

    #[test]
    fn test_entry_count() {
        let counts = ConfusionCounts::from_pairs(pairs(&[("PER", "ORG"), ("PER", "ORG"), ("ORG", "PER")]));
        assert_eq!(counts.entry_count("PER", "ORG"), 2);
        assert_eq!(counts.entry_count("ORG", "PER"), 1);
        assert_eq!(counts.entry_count("ORG", "ORG"), 0);
        assert_eq!(counts.entry_count("MISC", "PER"), 0);
    }

    #[test]
    fn test_empty() {
        let counts = ConfusionCounts::from_pairs(Vec::<LabeledPair>::new());
        assert!(counts.is_empty());
        assert_eq!(counts.n_labels(), 0);
        assert_eq!(counts.correct(), 0);
    }

    #[test]
    fn test_table_display() {
        let counts = ConfusionCounts::from_pairs(pairs(&[("PER", "ORG"), ("ORG", "ORG")]));
        let table = counts.to_string_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ORG"));
        assert!(lines[0].contains("PER"));
        assert!(lines[2].trim_start().starts_with("PER"));
        assert!(counts.to_string().starts_with("Confusion Matrix"));
    }
}
