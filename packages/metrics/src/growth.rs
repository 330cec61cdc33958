//! Complexity Growth
//!
//! Compares the average complexity of two fixed-size windows of a query
//! history. The "initial" window is the first `w` entries of the slice as
//! given and the "current" window is the last `w` entries. Under the
//! most-recent-first ordering this means initial = newest and current =
//! oldest. Swapping them flips the sign of growth, so the positions are kept
//! exactly as they are.

use crate::error::{MetricsError, Result};
use crate::sanitize::validate_queries;
use crate::types::{GrowthResult, QueryRecord, DEFAULT_GROWTH_WINDOW};

/// Growth over the default window of 5 queries
pub fn calculate_complexity_growth(queries: &[QueryRecord]) -> Result<GrowthResult> {
    calculate_complexity_growth_with(queries, DEFAULT_GROWTH_WINDOW)
}

/// Growth over windows of `window_size` queries.
///
/// Fewer than `2 * window_size` queries yields [`GrowthResult::no_growth`].
/// A zero initial average leaves `complexity_growth` as `None` while
/// `level_change` is still reported.
pub fn calculate_complexity_growth_with(
    queries: &[QueryRecord],
    window_size: usize,
) -> Result<GrowthResult> {
    if window_size == 0 {
        return Err(MetricsError::InvalidInput(
            "growth window size must be at least 1".to_string(),
        ));
    }
    validate_queries(queries)?;

    let required = window_size.saturating_mul(2);
    if queries.len() < required {
        return Ok(GrowthResult::no_growth());
    }

    let initial_avg = average_complexity(&queries[..window_size]);
    let current_avg = average_complexity(&queries[queries.len() - window_size..]);

    let level_change = current_avg - initial_avg;
    if !level_change.is_finite() {
        return Err(MetricsError::UndefinedResult(
            "window complexity averages overflowed".to_string(),
        ));
    }
    let complexity_growth = Some(level_change / initial_avg * 100.0)
        .filter(|growth| initial_avg != 0.0 && growth.is_finite());

    Ok(GrowthResult {
        complexity_growth,
        level_change,
    })
}

fn average_complexity(window: &[QueryRecord]) -> f64 {
    window.iter().map(|q| q.complexity).sum::<f64>() / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn with_complexities(complexities: &[f64]) -> Vec<QueryRecord> {
        complexities
            .iter()
            .map(|&c| QueryRecord::new(0.5, c))
            .collect()
    }

    #[test]
    fn test_short_history_no_growth() {
        let queries = with_complexities(&[1.0, 5.0, 3.0]);
        assert_eq!(
            calculate_complexity_growth(&queries).unwrap(),
            GrowthResult {
                complexity_growth: Some(0.0),
                level_change: 0.0
            }
        );
    }

    #[test]
    fn test_one_short_of_two_windows() {
        let queries = with_complexities(&[5.0; 9]);
        assert_eq!(
            calculate_complexity_growth(&queries).unwrap(),
            GrowthResult::no_growth()
        );
    }

    #[test]
    fn test_exactly_two_windows() {
        // initial (first five) avg 2, current (last five) avg 4
        let mut complexities = vec![2.0; 5];
        complexities.extend([4.0; 5]);
        let result = calculate_complexity_growth(&with_complexities(&complexities)).unwrap();
        assert!((result.level_change - 2.0).abs() < EPS);
        assert!((result.complexity_growth.unwrap() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_windows_follow_slice_positions() {
        // newest first: high complexity now, low complexity long ago
        let mut complexities = vec![4.0; 5];
        complexities.extend([2.0; 5]);
        let result = calculate_complexity_growth(&with_complexities(&complexities)).unwrap();
        assert!((result.level_change + 2.0).abs() < EPS);
        assert!((result.complexity_growth.unwrap() + 50.0).abs() < EPS);
    }

    #[test]
    fn test_middle_entries_ignored() {
        let complexities = [2.0, 2.0, 9.0, 9.0, 9.0, 3.0, 3.0];
        let result =
            calculate_complexity_growth_with(&with_complexities(&complexities), 2).unwrap();
        assert!((result.level_change - 1.0).abs() < EPS);
        assert!((result.complexity_growth.unwrap() - 50.0).abs() < EPS);
    }

    #[test]
    fn test_zero_initial_average_is_undefined_percentage() {
        let complexities = [0.0, 0.0, 3.0, 3.0];
        let result =
            calculate_complexity_growth_with(&with_complexities(&complexities), 2).unwrap();
        assert_eq!(result.complexity_growth, None);
        assert!((result.level_change - 3.0).abs() < EPS);
    }

    #[test]
    fn test_overflowing_window_is_undefined() {
        let mut queries = with_complexities(&[1e308; 2]);
        queries.extend(with_complexities(&[-1e308; 2]));
        assert!(calculate_complexity_growth_with(&queries, 2)
            .unwrap_err()
            .is_undefined());
    }

    #[test]
    fn test_zero_window_rejected() {
        let queries = with_complexities(&[3.0; 4]);
        assert!(matches!(
            calculate_complexity_growth_with(&queries, 0),
            Err(MetricsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_huge_window_no_overflow() {
        let queries = with_complexities(&[3.0; 4]);
        assert_eq!(
            calculate_complexity_growth_with(&queries, usize::MAX).unwrap(),
            GrowthResult::no_growth()
        );
    }

    #[test]
    fn test_nan_complexity_rejected() {
        let mut queries = with_complexities(&[3.0; 10]);
        queries[7].complexity = f64::NAN;
        assert!(calculate_complexity_growth(&queries).is_err());
    }
}
