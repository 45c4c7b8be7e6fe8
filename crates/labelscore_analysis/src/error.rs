//! Error types for metric computation.

use thiserror::Error;

/// Result type alias for metric computation.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Reasons a metric is undefined.
///
/// A score of `0.0` is always a valid result; these errors mark values that
/// cannot be computed at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    /// No pairs were evaluated.
    #[error("no labeled pairs were evaluated")]
    EmptyInput,

    /// Every observed label is ignored, so there is nothing to average over.
    #[error("no labels left to average over after applying the ignore set")]
    DegenerateLabelSet,

    /// Every pair has an ignored gold label, so accuracy has no denominator.
    #[error("every gold label is ignored; accuracy has no pairs to score")]
    AllGoldIgnored,

    /// Macro precision and recall are both zero.
    #[error("precision and recall are both zero; F1 is undefined")]
    UndefinedHarmonicMean,
}
