//! Comparator configuration
//!
//! Every field has a default, so a JSON file only needs the values it
//! overrides:
//!
//! ```json
//! { "threshold": 20.0, "policy": "strict", "group_by": ["segment_id", "rater"] }
//! ```

use crate::classify::ComparisonPolicy;
use crate::error::TauError;
use crate::ranking::{MetricOrientation, DEFAULT_THRESHOLD};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Columns forming the composite group key
    pub group_by: Vec<String>,
    /// Human DA score column
    pub human_col: String,
    /// Automatic metric score column
    pub metric_col: String,
    /// Minimum human score difference that counts as a preference
    pub threshold: f64,
    pub policy: ComparisonPolicy,
    pub metric_orientation: MetricOrientation,
    /// Process groups on the rayon pool
    pub parallel: bool,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            group_by: vec!["question_id".to_string(), "user_id".to_string()],
            human_col: "ranking".to_string(),
            metric_col: "score".to_string(),
            threshold: DEFAULT_THRESHOLD,
            policy: ComparisonPolicy::default(),
            metric_orientation: MetricOrientation::default(),
            parallel: true,
        }
    }
}

impl ComparatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ComparatorConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse comparator config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read comparator config: {:?}", path))?;

        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid comparator config: {:?}", path))
    }

    pub fn validate(&self) -> Result<(), TauError> {
        validate_threshold(self.threshold)?;
        if self.group_by.is_empty() {
            return Err(TauError::EmptyGroupBy);
        }
        Ok(())
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_metric_orientation(mut self, orientation: MetricOrientation) -> Self {
        self.metric_orientation = orientation;
        self
    }

    pub fn with_columns<S: Into<String>>(
        mut self,
        group_by: impl IntoIterator<Item = S>,
        human_col: impl Into<String>,
        metric_col: impl Into<String>,
    ) -> Self {
        self.group_by = group_by.into_iter().map(Into::into).collect();
        self.human_col = human_col.into();
        self.metric_col = metric_col.into();
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

fn validate_threshold(threshold: f64) -> Result<(), TauError> {
    // NaN fails this comparison too
    if threshold >= 0.0 {
        Ok(())
    } else {
        Err(TauError::InvalidThreshold(threshold))
    }
}
