//! # labelscore_analysis
//!
//! Classification metrics over gold/predicted label pairs.
//!
//! This crate provides:
//! - [`ConfusionCounts`], per-label counts aggregated from every pair
//! - Accuracy and macro-averaged precision, recall and F1 in [`metrics`]
//! - [`EvaluationResult`], the scores of one evaluation
//! - [`ClassificationReport`], a per-label breakdown for display
//!
//! Ignored labels keep all of their pairs in the counts. They only lose their
//! own term in the macro averages and their gold occurrences in accuracy.
//!
//! ## Example
//!
//! ```rust
//! use labelscore_analysis::{EvaluationResult, MetricError};
//!
//! let result = EvaluationResult::with_ignore_labels(
//!     ["O"],
//!     vec![("PER", "PER"), ("O", "PER"), ("O", "O")],
//! );
//!
//! assert_eq!(result.number_of_labels(), 1);
//! assert_eq!(result.accuracy(), Ok(1.0));
//! assert_eq!(result.precision(), Ok(0.5));
//!
//! let empty = EvaluationResult::new(Vec::<(&str, &str)>::new());
//! assert_eq!(empty.f1(), Err(MetricError::EmptyInput));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod confusion;
mod error;
mod evaluation;
pub mod metrics;
mod report;

pub use confusion::{ConfusionCounts, LabelCounts};
pub use error::{MetricError, Result};
pub use evaluation::EvaluationResult;
pub use report::{ClassificationReport, LabelMetrics};
