//! # labelscore_data
//!
//! Readers for files of gold/predicted label pairs.
//!
//! Two formats are supported:
//! - TSV: one `gold<TAB>predicted` pair per line, a lone `#` or `# ` starts a
//!   comment line (`#tag` is a label)
//! - JSON: an array of `{"gold": "...", "predicted": "..."}` objects
//!
//! ## Example
//!
//! ```rust,ignore
//! use labelscore_data::read_pairs;
//!
//! let pairs = read_pairs("predictions.tsv")?;
//! println!("{} pairs", pairs.len());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod io;

pub use error::{DataError, Result};
pub use io::{parse_pairs_json, parse_pairs_tsv, read_pairs, read_pairs_json, read_pairs_tsv};
