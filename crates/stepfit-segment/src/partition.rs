//! Slice arena backing the merge clusterer
//!
//! A [`SlicePartition`] owns one copy of the sample values plus an ordered
//! list of spans into that buffer. The spans cover the buffer with no gaps
//! and no overlaps at every point during clustering, so merging two
//! adjacent slices is a span join at fixed offsets instead of a deep copy.

use num_traits::{Float, NumCast};
use stepfit_core::Result;

/// A contiguous, non-empty span of the sample arena
///
/// Carries the sum of its values so the mean is available in O(1); sums add
/// when spans merge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T> {
    offset: usize,
    len: usize,
    sum: T,
}

impl<T: Float> Span<T> {
    fn over(samples: &[T], offset: usize, len: usize) -> Self {
        let sum = samples[offset..offset + len]
            .iter()
            .fold(T::zero(), |acc, &x| acc + x);
        Self { offset, len, sum }
    }

    /// Start index in the original series
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of samples in the span
    pub fn len(&self) -> usize {
        self.len
    }

    /// Spans are never empty; provided for completeness
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mean of the span's values
    pub fn mean(&self) -> T {
        let n: T = NumCast::from(self.len).unwrap();
        self.sum / n
    }
}

/// An ordered list of slices whose concatenation reproduces the series
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePartition<T> {
    samples: Vec<T>,
    spans: Vec<Span<T>>,
}

impl<T: Float> SlicePartition<T> {
    /// Build the initial partition by windowing `series` into chunks of
    /// `window_size` samples (last window may be shorter, never dropped)
    pub fn from_series(series: &[T], window_size: usize) -> Result<Self> {
        let windows = crate::window::partition(series, window_size)?;
        let samples = series.to_vec();
        let mut spans = Vec::with_capacity(windows.len());
        let mut offset = 0;
        for window in windows {
            spans.push(Span::over(&samples, offset, window.len()));
            offset += window.len();
        }
        Ok(Self { samples, spans })
    }

    /// Number of slices
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True when the partition holds no slices
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of samples across all slices
    pub fn sample_size(&self) -> usize {
        self.samples.len()
    }

    /// The underlying sample buffer, in original order
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// The spans, in series order
    pub fn spans(&self) -> &[Span<T>] {
        &self.spans
    }

    /// Values of slice `i`
    pub fn slice(&self, i: usize) -> &[T] {
        let span = &self.spans[i];
        &self.samples[span.offset..span.offset + span.len]
    }

    /// Mean of slice `i`
    pub fn mean(&self, i: usize) -> T {
        self.spans[i].mean()
    }

    /// Iterate over slice values in order
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.spans
            .iter()
            .map(|span| &self.samples[span.offset..span.offset + span.len])
    }

    /// Merge slice `i` with slice `i + 1`, preserving order
    ///
    /// The spans are adjacent in the arena, so the join only extends the
    /// left span and adds the cached sums.
    pub(crate) fn merge_with_next(&mut self, i: usize) {
        debug_assert!(i + 1 < self.spans.len());
        let right = self.spans.remove(i + 1);
        let left = &mut self.spans[i];
        debug_assert_eq!(left.offset + left.len, right.offset);
        left.len += right.len;
        left.sum = left.sum + right.sum;
    }
}
