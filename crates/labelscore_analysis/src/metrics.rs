//! Accuracy and macro-averaged precision, recall and F1.
//!
//! The ignore set is applied at two independent points:
//! - the averaging label set (observed labels minus ignored ones), used by
//!   macro precision and recall;
//! - the accuracy denominator, which drops pairs whose gold label is ignored.
//!
//! Per-label rates always use the full counts, including pairs whose gold or
//! predicted label is ignored.

use labelscore_core::{IgnoreSet, Label};

use crate::confusion::{ConfusionCounts, LabelCounts};
use crate::error::{MetricError, Result};

/// Labels that take part in macro averaging, in label order.
pub fn averaging_labels<'a>(counts: &'a ConfusionCounts, ignore: &IgnoreSet) -> Vec<&'a Label> {
    counts
        .labels()
        .filter(|label| !ignore.contains(label.as_str()))
        .collect()
}

/// Fraction of correct pairs among pairs whose gold label is not ignored.
///
/// With an empty ignore set this is `correct / total`.
pub fn accuracy(counts: &ConfusionCounts, ignore: &IgnoreSet) -> Result<f64> {
    if counts.is_empty() {
        return Err(MetricError::EmptyInput);
    }

    let (correct, scored) = counts
        .iter()
        .filter(|(label, _)| !ignore.contains(label.as_str()))
        .fold((0usize, 0usize), |(tp, n), (_, c)| (tp + c.true_positive, n + c.gold_total));

    if scored == 0 {
        return Err(MetricError::AllGoldIgnored);
    }
    Ok(correct as f64 / scored as f64)
}

/// Precision of a single label; `0.0` when the label was never predicted.
#[must_use]
pub fn label_precision(counts: &LabelCounts) -> f64 {
    if counts.predicted_total == 0 {
        0.0
    } else {
        counts.true_positive as f64 / counts.predicted_total as f64
    }
}

/// Recall of a single label; `0.0` when the label never occurs as gold.
#[must_use]
pub fn label_recall(counts: &LabelCounts) -> f64 {
    if counts.gold_total == 0 {
        0.0
    } else {
        counts.true_positive as f64 / counts.gold_total as f64
    }
}

/// Unweighted mean of `rate` over the averaging label set.
fn macro_average<F>(counts: &ConfusionCounts, ignore: &IgnoreSet, rate: F) -> Result<f64>
where
    F: Fn(&LabelCounts) -> f64,
{
    if counts.is_empty() {
        return Err(MetricError::EmptyInput);
    }

    let mut sum = 0.0;
    let mut n_labels = 0usize;
    for (label, label_counts) in counts.iter() {
        if ignore.contains(label.as_str()) {
            continue;
        }
        let value = rate(label_counts);
        tracing::trace!(label = %label, value, "per-label rate");
        sum += value;
        n_labels += 1;
    }

    if n_labels == 0 {
        return Err(MetricError::DegenerateLabelSet);
    }
    Ok(sum / n_labels as f64)
}

/// Macro-averaged precision over the non-ignored labels.
pub fn macro_precision(counts: &ConfusionCounts, ignore: &IgnoreSet) -> Result<f64> {
    macro_average(counts, ignore, label_precision)
}

/// Macro-averaged recall over the non-ignored labels.
pub fn macro_recall(counts: &ConfusionCounts, ignore: &IgnoreSet) -> Result<f64> {
    macro_average(counts, ignore, label_recall)
}

/// Harmonic mean of a precision and a recall value.
pub fn harmonic_mean(precision: f64, recall: f64) -> Result<f64> {
    let denominator = precision + recall;
    if denominator == 0.0 {
        return Err(MetricError::UndefinedHarmonicMean);
    }
    Ok(2.0 * precision * recall / denominator)
}

/// F1 as the harmonic mean of macro precision and macro recall.
///
/// This is not the mean of per-label F1 scores.
pub fn f1_score(counts: &ConfusionCounts, ignore: &IgnoreSet) -> Result<f64> {
    let precision = macro_precision(counts, ignore)?;
    let recall = macro_recall(counts, ignore)?;
    harmonic_mean(precision, recall)
}
