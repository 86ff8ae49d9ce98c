//! Core traits for series segmentation

use crate::types::Segmentation;
use num_traits::Float;
use stepfit_core::Result;

/// Properties of a segmenter that don't depend on the input
pub trait SegmenterProperties {
    /// Get the name of the segmentation algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum sample size required for segmentation
    fn minimum_sample_size(&self) -> usize;
}

/// Core trait for turning a raw series into a segmentation
///
/// Implementations own their parameters; the series is borrowed for the
/// duration of the call and copied once into the result's arena.
pub trait Segmenter<T: Float>: SegmenterProperties {
    /// Segment the given series into contiguous clusters
    fn segment(&self, series: &[T]) -> Result<Segmentation<T>>;
}
