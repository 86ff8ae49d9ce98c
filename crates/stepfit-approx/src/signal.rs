//! Full-length approximation signals
//!
//! Both signals align index-for-index with the original series: the step
//! signal holds each cluster's mean across that cluster's span, the
//! baseline holds the global mean everywhere.

use num_traits::Float;
use stepfit_core::{stats, Error, Result};
use stepfit_segment::Segmentation;

/// Expand each cluster's mean across its span
///
/// The cluster spans partition the series, so the result consumes indices
/// in the same order and total length as the input (no gaps, no overlap).
pub fn step_signal<T: Float>(segmentation: &Segmentation<T>) -> Vec<T> {
    let mut signal = Vec::with_capacity(segmentation.sample_size());
    for span in segmentation.spans() {
        let mean = span.mean();
        signal.extend(std::iter::repeat(mean).take(span.len()));
    }
    signal
}

/// Constant signal holding the mean of the full series
pub fn baseline_signal<T: Float>(series: &[T]) -> Result<Vec<T>> {
    if series.is_empty() {
        return Err(Error::empty_input("series"));
    }
    let mean = stats::mean(series);
    Ok(vec![mean; series.len()])
}
