//! Input Validation
//!
//! Numeric checks shared by every metric.
//!
//! Range is never validated here (negative or >100 scores are the producer's
//! business). Only values that are not real numbers are rejected.

use crate::error::{MetricsError, Result};
use crate::types::{AssessmentRecord, QueryRecord, TopicScore};

/// Whether the slice contains NaN or an infinity
pub fn has_invalid_values(arr: &[f64]) -> bool {
    arr.iter().any(|&x| x.is_nan() || x.is_infinite())
}

/// Reject a non-finite field value
pub fn ensure_finite(field: &str, index: usize, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MetricsError::InvalidInput(format!(
            "{field}[{index}] is not a finite number: {value}"
        )))
    }
}

pub fn validate_assessments(assessments: &[AssessmentRecord]) -> Result<()> {
    for (i, assessment) in assessments.iter().enumerate() {
        ensure_finite("assessment.score", i, assessment.score)?;
    }
    Ok(())
}

pub fn validate_queries(queries: &[QueryRecord]) -> Result<()> {
    for (i, query) in queries.iter().enumerate() {
        ensure_finite("query.score", i, query.score)?;
        ensure_finite("query.complexity", i, query.complexity)?;
    }
    Ok(())
}

pub fn validate_topic_scores(topics: &[TopicScore]) -> Result<()> {
    for (i, topic) in topics.iter().enumerate() {
        ensure_finite("topic.score", i, topic.score)?;
    }
    Ok(())
}

pub fn validate_scores(field: &str, scores: &[f64]) -> Result<()> {
    if !has_invalid_values(scores) {
        return Ok(());
    }
    for (i, &score) in scores.iter().enumerate() {
        ensure_finite(field, i, score)?;
    }
    Ok(())
}
