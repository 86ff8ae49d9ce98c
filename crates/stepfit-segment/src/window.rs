//! Fixed-size windowing of a series
//!
//! Splits a series into consecutive, non-overlapping windows of
//! `window_size` samples. The last window holds the remainder and may be
//! shorter, but it is never empty and never dropped.

use std::iter::FusedIterator;

use stepfit_core::{Error, Result};

/// Lazy, finite, forward-only iterator over the initial slices of a series
///
/// A single traversal suffices for clustering; to re-partition, call
/// [`partition`] again on the original series.
#[derive(Debug, Clone)]
pub struct Windows<'a, T> {
    remaining: &'a [T],
    window_size: usize,
}

/// Split `series` into consecutive windows of `window_size` samples
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for a zero window size and
/// [`Error::EmptyInput`] for an empty series.
pub fn partition<T>(series: &[T], window_size: usize) -> Result<Windows<'_, T>> {
    if window_size == 0 {
        return Err(Error::invalid_config("window_size must be positive"));
    }
    if series.is_empty() {
        return Err(Error::empty_input("series"));
    }
    Ok(Windows {
        remaining: series,
        window_size,
    })
}

impl<'a, T> Iterator for Windows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let take = self.window_size.min(self.remaining.len());
        let (window, rest) = self.remaining.split_at(take);
        self.remaining = rest;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len().div_ceil(self.window_size);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Windows<'_, T> {}
impl<T> FusedIterator for Windows<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_window_kept() {
        // 7 samples at window 3 -> lengths [3, 3, 1]
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let windows: Vec<&[f64]> = partition(&series, 3).unwrap().collect();
        let lengths: Vec<usize> = windows.iter().map(|w| w.len()).collect();
        assert_eq!(lengths, vec![3, 3, 1]);
        assert_eq!(windows[2], &[7.0]);
    }

    #[test]
    fn test_exact_division() {
        let series = [1.0, 2.0, 3.0, 4.0];
        let windows: Vec<&[f64]> = partition(&series, 2).unwrap().collect();
        assert_eq!(windows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }

    #[test]
    fn test_window_larger_than_series() {
        let series = [1.0, 2.0];
        let windows: Vec<&[f64]> = partition(&series, 10).unwrap().collect();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], &series[..]);
    }

    #[test]
    fn test_concatenation_reproduces_series() {
        let series: Vec<f64> = (0..23).map(|i| i as f64).collect();
        let rebuilt: Vec<f64> = partition(&series, 5)
            .unwrap()
            .flat_map(|w| w.iter().copied())
            .collect();
        assert_eq!(rebuilt, series);
    }

    #[test]
    fn test_exact_size() {
        let series = [0.0; 10];
        let windows = partition(&series, 4).unwrap();
        assert_eq!(windows.len(), 3);

        let mut windows = partition(&series, 4).unwrap();
        windows.next();
        assert_eq!(windows.len(), 2);
    }

    #[test]
    fn test_zero_window_size() {
        let series = [1.0];
        assert!(matches!(
            partition(&series, 0),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_series() {
        let series: [f64; 0] = [];
        assert!(matches!(partition(&series, 5), Err(Error::EmptyInput(_))));
    }
}
