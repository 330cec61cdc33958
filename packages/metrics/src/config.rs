//! Metric policy configuration
//!
//! Every default the metrics rely on (category weights, recency decay,
//! growth window, ranking size, normalization ceiling) is bundled here and
//! handed to each call, so one institution can override policy without
//! touching shared state.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::query::QueryAnalyticsParams;
use crate::types::{
    DEFAULT_DECAY_CONSTANT, DEFAULT_GROWTH_WINDOW, DEFAULT_MAX_SCORE, DEFAULT_WORST_TOPIC_COUNT,
    NEUTRAL_COMPLEXITY,
};
use crate::weights::WeightTable;

pub const ENV_DECAY_CONSTANT: &str = "METRICS_DECAY_CONSTANT";
pub const ENV_GROWTH_WINDOW: &str = "METRICS_GROWTH_WINDOW";
pub const ENV_WORST_TOPIC_COUNT: &str = "METRICS_WORST_TOPIC_COUNT";
pub const ENV_MAX_SCORE: &str = "METRICS_MAX_SCORE";
pub const ENV_WEIGHTS: &str = "METRICS_WEIGHTS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsConfig {
    pub weights: WeightTable,
    pub decay_constant: f64,
    pub growth_window: usize,
    pub worst_topic_count: usize,
    pub max_score: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            decay_constant: DEFAULT_DECAY_CONSTANT,
            growth_window: DEFAULT_GROWTH_WINDOW,
            worst_topic_count: DEFAULT_WORST_TOPIC_COUNT,
            max_score: DEFAULT_MAX_SCORE,
        }
    }
}

impl MetricsConfig {
    /// Read overrides from the process environment. Absent or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let decay_constant = lookup(ENV_DECAY_CONSTANT)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .unwrap_or(defaults.decay_constant);

        let growth_window = lookup(ENV_GROWTH_WINDOW)
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(defaults.growth_window);

        let worst_topic_count = lookup(ENV_WORST_TOPIC_COUNT)
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(defaults.worst_topic_count);

        let max_score = lookup(ENV_MAX_SCORE)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .unwrap_or(defaults.max_score);

        let weights = match lookup(ENV_WEIGHTS) {
            Some(raw) => match serde_json::from_str::<WeightTable>(&raw) {
                Ok(weights) => weights,
                Err(err) => {
                    tracing::warn!(error = %err, "Ignoring unparsable METRICS_WEIGHTS");
                    defaults.weights
                }
            },
            None => defaults.weights,
        };

        Self {
            weights,
            decay_constant,
            growth_window,
            worst_topic_count,
            max_score,
        }
    }

    /// Parse a JSON policy document. Missing keys take their defaults; the
    /// result is validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.query_params().validate()?;
        if self.growth_window == 0 {
            return Err(MetricsError::InvalidInput(
                "growth_window must be at least 1".to_string(),
            ));
        }
        if !self.max_score.is_finite() || self.max_score <= 0.0 {
            return Err(MetricsError::InvalidInput(format!(
                "max_score must be positive and finite, got {}",
                self.max_score
            )));
        }
        Ok(())
    }

    pub fn query_params(&self) -> QueryAnalyticsParams {
        QueryAnalyticsParams {
            decay_constant: self.decay_constant,
            neutral_complexity: NEUTRAL_COMPLEXITY,
        }
    }
}
