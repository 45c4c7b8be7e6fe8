//! # labelscore
//!
//! Multi-class classification metrics over gold/predicted label pairs.
//!
//! labelscore computes accuracy and macro-averaged precision, recall and F1:
//!
//! - **Core types**: labels, labeled pairs, ignore sets and configuration
//! - **Analysis**: confusion counts, metrics, evaluation results and reports
//! - **Data**: readers for TSV and JSON pair files
//!
//! Labels in the ignore set keep contributing to every count. They only lose
//! their own term in the macro averages and their gold pairs in accuracy. F1
//! is the harmonic mean of macro precision and macro recall.
//!
//! ## Quick Start
//!
//! ```rust
//! use labelscore::prelude::*;
//!
//! let pairs = vec![
//!     LabeledPair::new("PER", "PER"),
//!     LabeledPair::new("PER", "ORG"),
//!     LabeledPair::new("ORG", "ORG"),
//!     LabeledPair::new("O", "O"),
//! ];
//!
//! let result = EvaluationResult::with_ignore_labels(["O"], pairs);
//! assert_eq!(result.number_of_labels(), 2);
//! assert_eq!(result.accuracy(), Ok(2.0 / 3.0));
//!
//! println!("{}", result.report().to_string_table(4));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all crates
pub use labelscore_analysis as analysis;
pub use labelscore_core as core;
pub use labelscore_data as data;

/// Prelude module for convenient imports.
///
/// ```rust
/// use labelscore::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use labelscore_core::{EvaluationConfig, IgnoreSet, Label, LabeledPair};

    // Analysis
    pub use labelscore_analysis::{
        ClassificationReport, ConfusionCounts, EvaluationResult, LabelCounts, LabelMetrics,
        MetricError,
    };

    // Data
    pub use labelscore_data::{read_pairs, read_pairs_json, read_pairs_tsv};
}
