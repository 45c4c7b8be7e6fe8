//! Evaluation results over a collection of labeled pairs.
//!
//! [`EvaluationResult`] aggregates the pairs once and derives all four scores
//! from that single snapshot at construction time.

use labelscore_core::{IgnoreSet, Label, LabeledPair};

use crate::confusion::ConfusionCounts;
use crate::error::Result;
use crate::metrics;
use crate::report::ClassificationReport;

/// Scores for one evaluation of a classifier.
///
/// # Example
///
/// ```rust
/// use labelscore_analysis::EvaluationResult;
///
/// let result = EvaluationResult::new(vec![
///     ("PER", "PER"),
///     ("PER", "ORG"),
///     ("ORG", "ORG"),
///     ("LOC", "LOC"),
/// ]);
///
/// assert_eq!(result.number_of_labels(), 3);
/// assert_eq!(result.accuracy(), Ok(0.75));
/// ```
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    counts: ConfusionCounts,
    ignore: IgnoreSet,
    number_of_labels: usize,
    accuracy: Result<f64>,
    precision: Result<f64>,
    recall: Result<f64>,
    f1: Result<f64>,
    training_set_size: usize,
    test_set_size: usize,
    skip_reason: Option<String>,
}

impl EvaluationResult {
    /// Evaluate pairs without ignoring any label.
    pub fn new<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<LabeledPair>,
    {
        Self::from_counts(ConfusionCounts::from_pairs(pairs), IgnoreSet::new())
    }

    /// Evaluate pairs, leaving `ignore_labels` out of the macro averages.
    pub fn with_ignore_labels<L, S, I, P>(ignore_labels: L, pairs: I) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<Label>,
        I: IntoIterator<Item = P>,
        P: Into<LabeledPair>,
    {
        Self::from_counts(
            ConfusionCounts::from_pairs(pairs),
            ignore_labels.into_iter().collect(),
        )
    }

    /// Derive all scores from already aggregated counts.
    #[must_use]
    pub fn from_counts(counts: ConfusionCounts, ignore: IgnoreSet) -> Self {
        let number_of_labels = metrics::averaging_labels(&counts, &ignore).len();
        let accuracy = metrics::accuracy(&counts, &ignore);
        let precision = metrics::macro_precision(&counts, &ignore);
        let recall = metrics::macro_recall(&counts, &ignore);
        let f1 = match (precision, recall) {
            (Ok(p), Ok(r)) => metrics::harmonic_mean(p, r),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };

        tracing::debug!(
            pairs = counts.total(),
            labels = counts.n_labels(),
            ignored = ignore.len(),
            number_of_labels,
            "evaluation computed"
        );

        Self {
            counts,
            ignore,
            number_of_labels,
            accuracy,
            precision,
            recall,
            f1,
            training_set_size: 0,
            test_set_size: 0,
            skip_reason: None,
        }
    }

    /// A result for an evaluation that was not run.
    ///
    /// All scores of a skipped evaluation fail with
    /// [`MetricError::EmptyInput`](crate::MetricError::EmptyInput).
    #[must_use]
    pub fn skipped(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(reason = %reason, "evaluation skipped");
        let mut result = Self::from_counts(ConfusionCounts::default(), IgnoreSet::new());
        result.skip_reason = Some(reason);
        result
    }

    /// Record how many instances were used for training and for testing.
    #[must_use]
    pub fn with_set_sizes(mut self, training_set_size: usize, test_set_size: usize) -> Self {
        self.training_set_size = training_set_size;
        self.test_set_size = test_set_size;
        self
    }

    /// Fraction of correct pairs, over pairs whose gold label is not ignored.
    pub fn accuracy(&self) -> Result<f64> {
        self.accuracy
    }

    /// Macro-averaged precision.
    pub fn precision(&self) -> Result<f64> {
        self.precision
    }

    /// Macro-averaged recall.
    pub fn recall(&self) -> Result<f64> {
        self.recall
    }

    /// Harmonic mean of macro precision and macro recall.
    pub fn f1(&self) -> Result<f64> {
        self.f1
    }

    /// Number of labels averaged over: observed labels minus ignored ones.
    #[must_use]
    pub fn number_of_labels(&self) -> usize {
        self.number_of_labels
    }

    /// Labels averaged over, in label order.
    #[must_use]
    pub fn averaging_labels(&self) -> Vec<&Label> {
        metrics::averaging_labels(&self.counts, &self.ignore)
    }

    /// Counts the scores were derived from.
    #[must_use]
    pub fn confusion_counts(&self) -> &ConfusionCounts {
        &self.counts
    }

    /// Labels left out of averaging.
    #[must_use]
    pub fn ignore_labels(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Number of instances used for training.
    #[must_use]
    pub fn training_set_size(&self) -> usize {
        self.training_set_size
    }

    /// Number of instances used for testing.
    #[must_use]
    pub fn test_set_size(&self) -> usize {
        self.test_set_size
    }

    /// Share of training instances among all training and test instances.
    #[must_use]
    pub fn train_data_ratio(&self) -> Option<f64> {
        let total = self.training_set_size + self.test_set_size;
        if total == 0 {
            None
        } else {
            Some(self.training_set_size as f64 / total as f64)
        }
    }

    /// Whether this result stands for an evaluation that was not run.
    #[must_use]
    pub fn is_evaluation_skipped(&self) -> bool {
        self.skip_reason.is_some()
    }

    /// Why the evaluation was skipped.
    #[must_use]
    pub fn skip_reason(&self) -> Option<&str> {
        self.skip_reason.as_deref()
    }

    /// Per-label breakdown together with the aggregate scores.
    #[must_use]
    pub fn report(&self) -> ClassificationReport {
        ClassificationReport::from_result(self)
    }
}

impl<P: Into<LabeledPair>> FromIterator<P> for EvaluationResult {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
