//! Error measures between an approximation and the original series

use num_traits::{Float, NumCast};
use stepfit_core::{stats, Error, Result};

fn check_alignment<T>(predicted: &[T], actual: &[T], context: &str) -> Result<()> {
    if actual.is_empty() {
        return Err(Error::empty_input(context));
    }
    if predicted.len() != actual.len() {
        return Err(Error::size_mismatch(actual.len(), predicted.len(), context));
    }
    Ok(())
}

/// Root mean squared error
///
/// `sqrt(mean((actual - predicted)^2))` over all indices, none skipped.
pub fn rmse<T: Float>(predicted: &[T], actual: &[T]) -> Result<T> {
    check_alignment(predicted, actual, "rmse")?;
    let sum_sq = predicted
        .iter()
        .zip(actual)
        .fold(T::zero(), |acc, (&p, &a)| {
            let e = a - p;
            acc + e * e
        });
    let n: T = NumCast::from(actual.len()).unwrap();
    Ok((sum_sq / n).sqrt())
}

/// Geometric mean relative absolute error
///
/// Each term compares the approximation error `e_j = actual_j - predicted_j`
/// against the error the series' own mean makes at that index,
/// `d_j = actual_j - mean(actual)`. Indices where either error is exactly
/// zero contribute nothing to the log sum, but the exponent is still
/// divided by the TOTAL index count, skipped indices included. Existing
/// comparative reports depend on that scaling, so it must not change.
pub fn gmrae<T: Float>(predicted: &[T], actual: &[T]) -> Result<T> {
    check_alignment(predicted, actual, "gmrae")?;
    let actual_mean = stats::mean(actual);
    let mut log_sum = T::zero();
    for (&p, &a) in predicted.iter().zip(actual) {
        let e = (a - p).abs();
        let d = (a - actual_mean).abs();
        if e != T::zero() && d != T::zero() {
            log_sum = log_sum + (e / d).ln();
        }
    }
    let n: T = NumCast::from(actual.len()).unwrap();
    Ok((log_sum / n).exp())
}

/// Relative improvement of a candidate error over a baseline error
///
/// `(baseline - candidate) / baseline`; positive means the candidate
/// approximation is closer to the series than the baseline.
pub fn relative_improvement<T: Float>(baseline: T, candidate: T) -> Result<T> {
    if baseline == T::zero() {
        return Err(Error::DegenerateBaseline);
    }
    Ok((baseline - candidate) / baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rmse_identical_signals() {
        assert_relative_eq!(rmse(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_rmse_unit_offset() {
        assert_relative_eq!(rmse(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_rmse_known_value() {
        // Errors [3, 4] -> sqrt((9 + 16) / 2)
        let value = rmse(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert_relative_eq!(value, (12.5f64).sqrt());
    }

    #[test]
    fn test_gmrae_perfect_prediction_skips_all_terms() {
        // Every e_j is zero, so every term is skipped and exp(0/n) == 1
        let actual = [1.0, 2.0, 3.0];
        let value = gmrae(&actual, &actual).unwrap();
        assert_relative_eq!(value, 1.0);
    }

    #[test]
    fn test_gmrae_known_value() {
        // mean(actual) = 2; j=0: e=1, d=2 -> ln(0.5); j=1: e=2, d=2 -> ln(1)
        let actual = [0.0, 4.0];
        let predicted = [1.0, 2.0];
        let value = gmrae(&predicted, &actual).unwrap();
        assert_relative_eq!(value, (0.5f64.ln() / 2.0).exp());
    }

    #[test]
    fn test_gmrae_constant_series_skips_denominator_zeros() {
        // d_j = 0 everywhere; all terms skipped, no division error
        let actual = [5.0, 5.0, 5.0];
        let predicted = [4.0, 5.0, 6.0];
        assert_relative_eq!(gmrae(&predicted, &actual).unwrap(), 1.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        let empty: [f64; 0] = [];
        assert!(matches!(rmse(&empty, &empty), Err(Error::EmptyInput(_))));
        assert!(matches!(gmrae(&empty, &empty), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = rmse(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(Error::SizeMismatch { .. })));
    }

    #[test]
    fn test_relative_improvement() {
        assert_relative_eq!(relative_improvement(2.0, 1.0).unwrap(), 0.5);
        assert_relative_eq!(relative_improvement(2.0, 2.0).unwrap(), 0.0);
        // Candidate worse than baseline is negative
        assert_relative_eq!(relative_improvement(1.0, 2.0).unwrap(), -1.0);
    }

    #[test]
    fn test_degenerate_baseline() {
        assert!(matches!(
            relative_improvement(0.0, 1.0),
            Err(Error::DegenerateBaseline)
        ));
    }
}
