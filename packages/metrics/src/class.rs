//! Class-level aggregation for the instructor dashboard.

use crate::error::{MetricsError, Result};
use crate::sanitize::{validate_queries, validate_scores};
use crate::types::QueryRecord;

/// Arithmetic mean of per-student mastery scores.
///
/// An average over zero students is an error, not `0`.
pub fn calculate_class_topic_average(student_masteries: &[f64]) -> Result<f64> {
    if student_masteries.is_empty() {
        return Err(MetricsError::EmptyInput(
            "class average needs at least one student mastery".to_string(),
        ));
    }
    validate_scores("student_mastery", student_masteries)?;

    finite_mean(
        student_masteries.iter().sum::<f64>(),
        student_masteries.len(),
        "class mastery",
    )
}

/// Mean complexity over a class's pooled queries. Order does not matter here.
pub fn calculate_average_query_complexity(queries: &[QueryRecord]) -> Result<f64> {
    if queries.is_empty() {
        return Err(MetricsError::EmptyInput(
            "average query complexity needs at least one query".to_string(),
        ));
    }
    validate_queries(queries)?;

    finite_mean(
        queries.iter().map(|q| q.complexity).sum::<f64>(),
        queries.len(),
        "query complexity",
    )
}

fn finite_mean(sum: f64, len: usize, what: &str) -> Result<f64> {
    let mean = sum / len as f64;
    if !mean.is_finite() {
        return Err(MetricsError::UndefinedResult(format!("{what} sum overflowed")));
    }
    Ok(mean)
}
