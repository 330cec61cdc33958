//! Assessment category weights
//!
//! Keys are open-ended: a category with no entry weighs [`NEUTRAL_WEIGHT`],
//! so an unconfigured category never erases a student's score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::types::{
    DEFAULT_EXAM_WEIGHT, DEFAULT_HOMEWORK_WEIGHT, DEFAULT_QUIZ_WEIGHT, NEUTRAL_WEIGHT,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl WeightTable {
    /// Empty table: every category weighs 1
    pub fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            weights: pairs.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }

    pub fn with_weight(mut self, category: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(category.into(), weight);
        self
    }

    /// Weight for a category, falling back to the neutral multiplier
    pub fn weight(&self, category: &str) -> f64 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(NEUTRAL_WEIGHT)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.weights.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, &w)| (k.as_str(), w))
    }

    /// Weights must be positive and finite.
    pub fn validate(&self) -> Result<()> {
        for (category, &weight) in &self.weights {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(MetricsError::InvalidInput(format!(
                    "weight for '{category}' must be positive and finite, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::from_pairs([
            ("exam", DEFAULT_EXAM_WEIGHT),
            ("quiz", DEFAULT_QUIZ_WEIGHT),
            ("homework", DEFAULT_HOMEWORK_WEIGHT),
        ])
    }
}
