//! # labelscore_core
//!
//! Core types for labelscore classification evaluation.
//!
//! This crate provides:
//! - [`Label`] and [`LabeledPair`], the gold/predicted values being evaluated
//! - [`IgnoreSet`] for labels left out of macro averaging
//! - [`EvaluationConfig`] for file-based evaluation settings
//! - Error types and common utilities
//!
//! ## Example
//!
//! ```rust
//! use labelscore_core::{IgnoreSet, LabeledPair};
//!
//! let pairs = vec![LabeledPair::new("PER", "PER"), LabeledPair::new("ORG", "PER")];
//! let ignore: IgnoreSet = ["ORG"].into_iter().collect();
//!
//! assert!(pairs[0].is_correct());
//! assert!(ignore.contains("ORG"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod ignore;
mod label;

pub use config::{EvaluationConfig, MAX_DECIMALS};
pub use error::{CoreError, Result};
pub use ignore::IgnoreSet;
pub use label::{Label, LabeledPair};
