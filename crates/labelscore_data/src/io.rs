//! I/O utilities for reading labeled pairs.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use labelscore_core::LabeledPair;

use crate::error::{DataError, Result};

/// Parse labeled pairs from TSV text.
///
/// Each non-empty line holds the gold label and the predicted label separated
/// by a tab. Lines without a tab are split on whitespace instead. A line that is
/// a lone `#`, or starts with `#` followed by a space or tab, is a comment;
/// `#tag` is an ordinary label.
pub fn parse_pairs_tsv<R: BufRead>(reader: R) -> Result<Vec<LabeledPair>> {
    let mut pairs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        let parts: Vec<&str> = if line.contains('\t') {
            line.split('\t').map(str::trim).collect()
        } else {
            line.split_whitespace().collect()
        };

        match parts.as_slice() {
            [gold, predicted] if !gold.is_empty() && !predicted.is_empty() => {
                pairs.push(LabeledPair::new(*gold, *predicted));
            }
            _ => {
                return Err(DataError::Parse {
                    line: idx + 1,
                    message: format!("expected 'gold<TAB>predicted', got {line:?}"),
                });
            }
        }
    }

    tracing::debug!(pairs = pairs.len(), "parsed TSV pairs");
    Ok(pairs)
}

fn is_comment(line: &str) -> bool {
    match line.strip_prefix('#') {
        Some(rest) => rest.is_empty() || rest.starts_with([' ', '\t']),
        None => false,
    }
}

/// Parse labeled pairs from a JSON array of `{"gold", "predicted"}` objects.
pub fn parse_pairs_json<R: Read>(reader: R) -> Result<Vec<LabeledPair>> {
    let pairs: Vec<LabeledPair> = serde_json::from_reader(reader)
        .map_err(|e| DataError::Format(format!("Failed to read JSON pairs: {e}")))?;
    tracing::debug!(pairs = pairs.len(), "parsed JSON pairs");
    Ok(pairs)
}

/// Read labeled pairs from a TSV file.
pub fn read_pairs_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledPair>> {
    let file = File::open(path.as_ref())?;
    parse_pairs_tsv(BufReader::new(file))
}

/// Read labeled pairs from a JSON file.
pub fn read_pairs_json<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledPair>> {
    let file = File::open(path.as_ref())?;
    parse_pairs_json(BufReader::new(file))
}

/// Read labeled pairs, choosing the format from the file extension.
///
/// `.json` files are read as JSON; anything else as TSV.
pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledPair>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        read_pairs_json(path)
    } else {
        read_pairs_tsv(path)
    }
}
