//! Classification report with per-label metrics.
//!
//! Provides a per-label breakdown of precision, recall and F1 alongside the
//! macro-averaged scores of an [`EvaluationResult`].

use serde::{Deserialize, Serialize};

use labelscore_core::Label;

use crate::evaluation::EvaluationResult;
use crate::metrics::{label_precision, label_recall};

/// Per-label classification metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    /// The label.
    pub label: Label,
    /// Precision: TP / predicted (0 when never predicted).
    pub precision: f64,
    /// Recall: TP / gold (0 when never gold).
    pub recall: f64,
    /// Harmonic mean of this label's precision and recall (0 when both are 0).
    pub f1_score: f64,
    /// Support: number of pairs with this gold label.
    pub support: usize,
    /// Number of pairs predicted as this label.
    pub predicted: usize,
    /// Whether the label is left out of the macro averages.
    pub ignored: bool,
}

/// Classification report with per-label and aggregate metrics.
///
/// Aggregate scores are `None` when undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Per-label metrics, in label order.
    pub labels: Vec<LabelMetrics>,
    /// Accuracy over pairs whose gold label is not ignored.
    pub accuracy: Option<f64>,
    /// Macro-averaged precision.
    pub macro_precision: Option<f64>,
    /// Macro-averaged recall.
    pub macro_recall: Option<f64>,
    /// Harmonic mean of macro precision and macro recall.
    pub macro_f1: Option<f64>,
    /// Number of labels averaged over.
    pub number_of_labels: usize,
    /// Total number of pairs.
    pub total_pairs: usize,
}

impl ClassificationReport {
    /// Build the report for an evaluation result.
    pub fn from_result(result: &EvaluationResult) -> Self {
        let ignore = result.ignore_labels();
        let labels = result
            .confusion_counts()
            .iter()
            .map(|(label, counts)| {
                let precision = label_precision(counts);
                let recall = label_recall(counts);
                let f1_score = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                LabelMetrics {
                    label: label.clone(),
                    precision,
                    recall,
                    f1_score,
                    support: counts.gold_total,
                    predicted: counts.predicted_total,
                    ignored: ignore.contains(label.as_str()),
                }
            })
            .collect();

        Self {
            labels,
            accuracy: result.accuracy().ok(),
            macro_precision: result.precision().ok(),
            macro_recall: result.recall().ok(),
            macro_f1: result.f1().ok(),
            number_of_labels: result.number_of_labels(),
            total_pairs: result.confusion_counts().total(),
        }
    }

    /// Display the report as a formatted string with `decimals` digits.
    pub fn to_string_table(&self, decimals: usize) -> String {
        let width = decimals + 6;
        let mut output = String::new();

        output.push_str(&format!(
            "{:>12} {:>width$} {:>width$} {:>width$} {:>9}\n\n",
            "", "precision", "recall", "f1-score", "support"
        ));

        for row in &self.labels {
            let name = if row.ignored {
                format!("{}*", row.label)
            } else {
                row.label.to_string()
            };
            output.push_str(&format!(
                "{:>12} {:>width$.decimals$} {:>width$.decimals$} {:>width$.decimals$} {:>9}\n",
                name, row.precision, row.recall, row.f1_score, row.support
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "{:>12} {:>width$} {:>width$} {:>width$} {:>9}\n",
            "accuracy",
            "",
            "",
            fmt_score(self.accuracy, decimals),
            self.total_pairs
        ));
        output.push_str(&format!(
            "{:>12} {:>width$} {:>width$} {:>width$} {:>9}\n",
            "macro avg",
            fmt_score(self.macro_precision, decimals),
            fmt_score(self.macro_recall, decimals),
            fmt_score(self.macro_f1, decimals),
            self.number_of_labels
        ));

        if self.labels.iter().any(|row| row.ignored) {
            output.push_str("\n* ignored in macro averages\n");
        }

        output
    }

    /// Get the averaged label with lowest F1-score (worst performing).
    pub fn worst_label(&self) -> Option<&LabelMetrics> {
        self.scored_labels()
            .min_by(|a, b| a.f1_score.total_cmp(&b.f1_score))
    }

    /// Get the averaged label with highest F1-score (best performing).
    pub fn best_label(&self) -> Option<&LabelMetrics> {
        self.scored_labels()
            .max_by(|a, b| a.f1_score.total_cmp(&b.f1_score))
    }

    fn scored_labels(&self) -> impl Iterator<Item = &LabelMetrics> {
        self.labels.iter().filter(|row| !row.ignored && row.support > 0)
    }
}

fn fmt_score(score: Option<f64>, decimals: usize) -> String {
    match score {
        Some(value) => format!("{value:.decimals$}"),
        None => "n/a".to_string(),
    }
}
