//! Evaluation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::ignore::IgnoreSet;

/// Largest number of decimals accepted for report rendering.
pub const MAX_DECIMALS: usize = 12;

/// Configuration for an evaluation run.
///
/// Stored as pretty-printed JSON:
///
/// ```json
/// {
///   "ignore_labels": ["O"],
///   "decimals": 4,
///   "show_matrix": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Labels excluded from macro averaging.
    pub ignore_labels: Vec<String>,
    /// Number of decimals used when rendering scores.
    pub decimals: usize,
    /// Whether to render the gold/predicted matrix alongside the report.
    pub show_matrix: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            ignore_labels: Vec::new(),
            decimals: 4,
            show_matrix: false,
        }
    }
}

impl EvaluationConfig {
    /// Add labels to ignore on top of those already configured.
    #[must_use]
    pub fn merge_ignore_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            let label = label.into();
            if !self.ignore_labels.contains(&label) {
                self.ignore_labels.push(label);
            }
        }
        self
    }

    /// Build the ignore set described by this configuration.
    #[must_use]
    pub fn ignore_set(&self) -> IgnoreSet {
        self.ignore_labels.iter().collect()
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(CoreError::InvalidConfig(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        if let Some(blank) = self.ignore_labels.iter().find(|l| l.trim().is_empty()) {
            return Err(CoreError::InvalidConfig(format!(
                "ignore label must not be blank: {blank:?}"
            )));
        }
        Ok(())
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
