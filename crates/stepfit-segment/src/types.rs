//! Result types for segmentation

use std::fmt;

use crate::partition::{SlicePartition, Span};
use num_traits::Float;

/// Result of adaptive segmentation
///
/// Holds the final partition (the cluster set) together with how hard the
/// algorithm had to work to reach it. The concatenation of the clusters, in
/// order, reproduces the input series exactly.
#[derive(Debug, Clone)]
pub struct Segmentation<T> {
    partition: SlicePartition<T>,
    final_epsilon: T,
    escalations: usize,
    scans: usize,
}

impl<T: Float> Segmentation<T> {
    pub(crate) fn new(
        partition: SlicePartition<T>,
        final_epsilon: T,
        escalations: usize,
        scans: usize,
    ) -> Self {
        Self {
            partition,
            final_epsilon,
            escalations,
            scans,
        }
    }

    /// Number of clusters
    pub fn count(&self) -> usize {
        self.partition.len()
    }

    /// Total number of samples analyzed
    pub fn sample_size(&self) -> usize {
        self.partition.sample_size()
    }

    /// Iterate over cluster values in series order
    pub fn clusters(&self) -> impl Iterator<Item = &[T]> {
        self.partition.iter()
    }

    /// Mean of each cluster, in series order
    pub fn means(&self) -> Vec<T> {
        self.partition.spans().iter().map(|s| s.mean()).collect()
    }

    /// Start index of each cluster in the original series
    pub fn boundaries(&self) -> Vec<usize> {
        self.partition.spans().iter().map(|s| s.offset()).collect()
    }

    /// The cluster spans (offset, length, cached sum)
    pub fn spans(&self) -> &[Span<T>] {
        self.partition.spans()
    }

    /// The analyzed samples, in original order
    pub fn samples(&self) -> &[T] {
        self.partition.samples()
    }

    /// The final partition
    pub fn partition(&self) -> &SlicePartition<T> {
        &self.partition
    }

    /// Similarity tolerance in effect when the budget was satisfied
    pub fn final_epsilon(&self) -> T {
        self.final_epsilon
    }

    /// Number of tolerance escalations performed
    pub fn escalations(&self) -> usize {
        self.escalations
    }

    /// Number of left-to-right scans performed
    pub fn scans(&self) -> usize {
        self.scans
    }
}

impl<T: Float + fmt::Display> fmt::Display for Segmentation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Segmentation Result:")?;
        writeln!(f, "  Sample size: {}", self.sample_size())?;
        writeln!(f, "  Clusters: {}", self.count())?;
        writeln!(f, "  Final epsilon: {}", self.final_epsilon)?;
        writeln!(f, "  Escalations: {}", self.escalations)?;
        for (i, span) in self.partition.spans().iter().enumerate() {
            writeln!(
                f,
                "    [{}] start={}, len={}, mean={:.4}",
                i,
                span.offset(),
                span.len(),
                span.mean()
            )?;
        }
        Ok(())
    }
}
