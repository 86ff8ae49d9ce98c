//! Shared numeric helpers
//!
//! Small free functions used across the workspace. All are generic over
//! `num_traits::Float` so callers can work in `f32` or `f64`.

use num_traits::{Float, NumCast};

/// Arithmetic mean of a sample.
///
/// The sample must be non-empty; public entry points validate emptiness
/// before calling in here.
pub fn mean<T: Float>(sample: &[T]) -> T {
    debug_assert!(!sample.is_empty(), "mean of an empty sample");
    let sum = sample.iter().fold(T::zero(), |acc, &x| acc + x);
    let n: T = NumCast::from(sample.len()).unwrap();
    sum / n
}

/// Convert a monotonic counter series into per-interval deltas.
///
/// Cumulative counters (total bytes written, total page faults) carry their
/// history in every sample; segmentation wants the activity per interval
/// instead. The first interval has no predecessor and reports zero.
pub fn counter_deltas<T: Float>(series: &[T]) -> Vec<T> {
    let mut deltas = Vec::with_capacity(series.len());
    let mut prev = None;
    for &value in series {
        match prev {
            None => deltas.push(T::zero()),
            Some(p) => deltas.push(value - p),
        }
        prev = Some(value);
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_relative_eq!(mean(&[5.0]), 5.0);
        assert_relative_eq!(mean(&[-1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_mean_f32() {
        let m: f32 = mean(&[1.0f32, 2.0, 3.0, 4.0]);
        assert_relative_eq!(m, 2.5f32);
    }

    #[test]
    fn test_counter_deltas() {
        let counter = [0.0, 10.0, 25.0, 25.0, 40.0];
        let deltas = counter_deltas(&counter);
        assert_eq!(deltas, vec![0.0, 10.0, 15.0, 0.0, 15.0]);
    }

    #[test]
    fn test_counter_deltas_empty() {
        let deltas: Vec<f64> = counter_deltas(&[]);
        assert!(deltas.is_empty());
    }

    #[test]
    fn test_counter_deltas_single() {
        assert_eq!(counter_deltas(&[7.0]), vec![0.0]);
    }
}
