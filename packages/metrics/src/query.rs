//! Query Analytics
//!
//! Engagement quality of a student's questions to the tutoring assistant,
//! as a recency- and complexity-weighted average of query scores.
//!
//! For the query at position `i` (0 = most recent):
//! - recency weight `e^(-i / decay_constant)`
//! - complexity weight `1 + (complexity - 3) / 2`
//!
//! Result = `Σ score × w / Σ w`. The input must be ordered most-recent-first;
//! the position is the only recency signal.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::sanitize::validate_queries;
use crate::types::{QueryRecord, DEFAULT_DECAY_CONSTANT, NEUTRAL_COMPLEXITY};

/// Tunable policy of the query analytics engine
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryAnalyticsParams {
    /// Positions over which recency weight decays by a factor of e
    pub decay_constant: f64,
    /// Complexity that weighs exactly 1.0
    pub neutral_complexity: f64,
}

impl Default for QueryAnalyticsParams {
    fn default() -> Self {
        Self {
            decay_constant: DEFAULT_DECAY_CONSTANT,
            neutral_complexity: NEUTRAL_COMPLEXITY,
        }
    }
}

impl QueryAnalyticsParams {
    pub fn validate(&self) -> Result<()> {
        if !self.decay_constant.is_finite() || self.decay_constant <= 0.0 {
            return Err(MetricsError::InvalidInput(format!(
                "decay_constant must be positive and finite, got {}",
                self.decay_constant
            )));
        }
        if !self.neutral_complexity.is_finite() {
            return Err(MetricsError::InvalidInput(
                "neutral_complexity must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Weight of the query at `position` (0 = most recent)
    #[inline]
    pub fn recency_weight(&self, position: usize) -> f64 {
        (-(position as f64) / self.decay_constant).exp()
    }

    /// Not clamped: complexity 1 weighs 0, below 1 weighs negative.
    #[inline]
    pub fn complexity_weight(&self, complexity: f64) -> f64 {
        1.0 + (complexity - self.neutral_complexity) / 2.0
    }
}

/// Weighted engagement score with default parameters
pub fn calculate_query_analytics(queries: &[QueryRecord]) -> Result<f64> {
    calculate_query_analytics_with(queries, &QueryAnalyticsParams::default())
}

/// Weighted engagement score.
///
/// Returns [`MetricsError::UndefinedResult`] when the total weight is zero
/// (empty history, or every query at complexity 1) or when extreme values
/// overflow the weighted sums.
pub fn calculate_query_analytics_with(
    queries: &[QueryRecord],
    params: &QueryAnalyticsParams,
) -> Result<f64> {
    params.validate()?;
    validate_queries(queries)?;

    let mut total_weight = 0.0;
    let mut weighted_score = 0.0;
    for (i, query) in queries.iter().enumerate() {
        let weight = params.recency_weight(i) * params.complexity_weight(query.complexity);
        total_weight += weight;
        weighted_score += query.score * weight;
    }

    if total_weight == 0.0 {
        return Err(MetricsError::UndefinedResult(format!(
            "total query weight is zero over {} queries",
            queries.len()
        )));
    }

    let result = weighted_score / total_weight;
    if !result.is_finite() {
        return Err(MetricsError::UndefinedResult(format!(
            "weighted query score overflowed over {} queries",
            queries.len()
        )));
    }

    Ok(result)
}
