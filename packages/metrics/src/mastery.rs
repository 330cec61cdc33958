//! Topic Mastery
//!
//! Mastery is the weighted sum `Σ score × weight(type)` over a student's
//! assessments. It is deliberately not bounded: more assessments mean a larger
//! value. Use [`normalize_topic_mastery`] when a 0..1 display value is needed.

use crate::error::{MetricsError, Result};
use crate::sanitize::validate_assessments;
use crate::types::AssessmentRecord;
use crate::weights::WeightTable;

/// Mastery with the default exam/quiz/homework weights
pub fn calculate_topic_mastery(assessments: &[AssessmentRecord]) -> Result<f64> {
    calculate_topic_mastery_with(assessments, &WeightTable::default())
}

/// Mastery with a caller-provided weight table. Empty input is `0`.
///
/// Every weight in the table must be positive and finite: a zero or NaN
/// weight would silently erase the category.
pub fn calculate_topic_mastery_with(
    assessments: &[AssessmentRecord],
    weights: &WeightTable,
) -> Result<f64> {
    weights.validate()?;
    validate_assessments(assessments)?;

    let mastery: f64 = assessments
        .iter()
        .map(|a| a.score * weights.weight(&a.kind))
        .sum();
    if !mastery.is_finite() {
        return Err(MetricsError::UndefinedResult(
            "weighted assessment sum overflowed".to_string(),
        ));
    }

    Ok(mastery)
}

/// Bounded mastery: the weighted sum divided by the largest weighted sum the
/// same assessments could reach, `Σ weight(type) × max_score`.
///
/// Returns `0` for an empty history.
pub fn normalize_topic_mastery(
    assessments: &[AssessmentRecord],
    weights: &WeightTable,
    max_score: f64,
) -> Result<f64> {
    if !max_score.is_finite() || max_score <= 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "max_score must be positive and finite, got {max_score}"
        )));
    }
    weights.validate()?;
    if assessments.is_empty() {
        return Ok(0.0);
    }

    let mastery = calculate_topic_mastery_with(assessments, weights)?;
    let weight_sum: f64 = assessments.iter().map(|a| weights.weight(&a.kind)).sum();
    let ceiling = weight_sum * max_score;
    if ceiling == 0.0 {
        return Err(MetricsError::UndefinedResult(
            "assessment weights sum to zero".to_string(),
        ));
    }

    let normalized = mastery / ceiling;
    if !normalized.is_finite() {
        return Err(MetricsError::UndefinedResult(
            "normalization ceiling overflowed".to_string(),
        ));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample() -> Vec<AssessmentRecord> {
        vec![
            AssessmentRecord::new("exam", 80.0),
            AssessmentRecord::new("quiz", 90.0),
            AssessmentRecord::new("homework", 70.0),
        ]
    }

    #[test]
    fn test_default_weighted_sum() {
        let mastery = calculate_topic_mastery(&sample()).unwrap();
        assert!((mastery - 81.0).abs() < EPS, "mastery = {}", mastery);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate_topic_mastery(&[]).unwrap(), 0.0);
        assert_eq!(
            calculate_topic_mastery_with(&[], &WeightTable::empty()).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_unknown_type_contributes_raw_score() {
        let records = vec![AssessmentRecord::new("project", 65.0)];
        assert_eq!(calculate_topic_mastery(&records).unwrap(), 65.0);
    }

    #[test]
    fn test_grows_with_assessment_count() {
        let one = calculate_topic_mastery(&[AssessmentRecord::new("quiz", 100.0)]).unwrap();
        let two = calculate_topic_mastery(&[
            AssessmentRecord::new("quiz", 100.0),
            AssessmentRecord::new("quiz", 100.0),
        ])
        .unwrap();
        assert!((two - 2.0 * one).abs() < EPS);
    }

    #[test]
    fn test_custom_weights() {
        let weights = WeightTable::empty().with_weight("exam", 2.0);
        let records = vec![
            AssessmentRecord::new("exam", 10.0),
            AssessmentRecord::new("quiz", 5.0),
        ];
        assert_eq!(calculate_topic_mastery_with(&records, &weights).unwrap(), 25.0);
    }

    #[test]
    fn test_negative_scores_do_not_fail() {
        let records = vec![AssessmentRecord::new("exam", -20.0)];
        assert_eq!(calculate_topic_mastery(&records).unwrap(), -10.0);
    }

    #[test]
    fn test_nan_score_rejected() {
        let records = vec![AssessmentRecord::new("exam", f64::NAN)];
        assert!(matches!(
            calculate_topic_mastery(&records),
            Err(MetricsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let weights = WeightTable::empty().with_weight("exam", f64::NAN);
        let records = vec![AssessmentRecord::new("exam", 80.0)];
        assert!(matches!(
            calculate_topic_mastery_with(&records, &weights),
            Err(MetricsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let weights = WeightTable::empty().with_weight("exam", 0.0);
        let records = vec![AssessmentRecord::new("exam", 80.0)];
        assert!(matches!(
            calculate_topic_mastery_with(&records, &weights),
            Err(MetricsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_weight_rejected_even_when_unused() {
        let weights = WeightTable::default().with_weight("lab", -1.0);
        assert!(calculate_topic_mastery_with(&[], &weights).is_err());
    }

    #[test]
    fn test_overflowing_sum_is_undefined() {
        let records = vec![
            AssessmentRecord::new("project", f64::MAX),
            AssessmentRecord::new("project", f64::MAX),
        ];
        assert!(calculate_topic_mastery(&records).unwrap_err().is_undefined());
    }

    // ==================== normalization ====================

    #[test]
    fn test_normalize_default_sample() {
        // 81 / ((0.5 + 0.3 + 0.2) * 100)
        let value = normalize_topic_mastery(&sample(), &WeightTable::default(), 100.0).unwrap();
        assert!((value - 0.81).abs() < EPS);
    }

    #[test]
    fn test_normalize_perfect_scores_is_one() {
        let records = vec![
            AssessmentRecord::new("exam", 100.0),
            AssessmentRecord::new("lab", 100.0),
        ];
        let value = normalize_topic_mastery(&records, &WeightTable::default(), 100.0).unwrap();
        assert!((value - 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_empty_is_zero() {
        assert_eq!(
            normalize_topic_mastery(&[], &WeightTable::default(), 100.0).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_normalize_rejects_invalid_weights() {
        let records = vec![AssessmentRecord::new("exam", 80.0)];
        let nan = WeightTable::empty().with_weight("exam", f64::NAN);
        let zero = WeightTable::empty().with_weight("exam", 0.0);
        assert!(matches!(
            normalize_topic_mastery(&records, &nan, 100.0),
            Err(MetricsError::InvalidInput(_))
        ));
        assert!(matches!(
            normalize_topic_mastery(&records, &zero, 100.0),
            Err(MetricsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_bad_max_score() {
        assert!(normalize_topic_mastery(&sample(), &WeightTable::default(), 0.0).is_err());
        assert!(normalize_topic_mastery(&sample(), &WeightTable::default(), f64::NAN).is_err());
    }
}
