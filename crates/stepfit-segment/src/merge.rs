//! Adaptive mean-merge clustering
//!
//! Greedy, deterministic coarsening of an initial window partition: the
//! leftmost adjacent pair of slices whose means lie within a relative
//! tolerance is merged, the scan restarts from the beginning, and once a
//! scan completes without merging, the tolerance escalates until the slice
//! count fits the cluster budget.

use crate::config::SegmentationConfig;
use crate::partition::SlicePartition;
use crate::traits::{Segmenter, SegmenterProperties};
use crate::types::Segmentation;
use num_traits::{Float, ToPrimitive};
use stepfit_core::{Error, Result};
use tracing::debug;

/// Adaptive mean-merge clusterer
///
/// Operates on slice means only. Merge order is part of the contract:
/// always the leftmost similar pair first, one merge per scan, so repeated
/// runs over the same input produce identical cluster boundaries.
#[derive(Debug, Clone)]
pub struct MergeClusterer<T: Float> {
    config: SegmentationConfig<T>,
}

impl<T: Float> MergeClusterer<T> {
    /// Create a new clusterer with the given configuration
    pub fn new(config: SegmentationConfig<T>) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SegmentationConfig<T> {
        &self.config
    }

    /// Cluster a pre-built slice partition
    ///
    /// Escalation is cumulative: each round coarsens the partition the
    /// previous round produced, never the original windows.
    pub fn cluster(&self, mut slices: SlicePartition<T>) -> Result<Segmentation<T>> {
        self.config.validate()?;
        if slices.is_empty() {
            return Err(Error::empty_input("slice list"));
        }

        let budget = self.config.cluster_budget;
        let mut epsilon = self.config.epsilon;
        let mut escalations = 0usize;
        let mut scans = 0usize;

        loop {
            // Converge at the current tolerance: merge the leftmost similar
            // pair, then rescan the (now shorter) list from the start. A
            // scan without a merge means convergence.
            loop {
                scans += 1;
                match first_similar_pair(&slices, epsilon) {
                    Some(i) => slices.merge_with_next(i),
                    None => break,
                }
            }

            if slices.len() <= budget {
                break;
            }
            if escalations >= self.config.max_escalations {
                return Err(Error::DidNotConverge {
                    rounds: escalations,
                    clusters: slices.len(),
                    budget,
                });
            }
            escalations += 1;
            epsilon = epsilon + self.config.epsilon_step;
            debug!(
                round = escalations,
                clusters = slices.len(),
                epsilon = epsilon.to_f64().unwrap_or(f64::NAN),
                "cluster count over budget, raising tolerance"
            );
        }

        Ok(Segmentation::new(slices, epsilon, escalations, scans))
    }
}

impl<T: Float> SegmenterProperties for MergeClusterer<T> {
    fn algorithm_name(&self) -> &'static str {
        "AdaptiveMeanMerge"
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl<T: Float> Segmenter<T> for MergeClusterer<T> {
    fn segment(&self, series: &[T]) -> Result<Segmentation<T>> {
        self.config.validate()?;
        let slices = SlicePartition::from_series(series, self.config.window_size)?;
        self.cluster(slices)
    }
}

/// Index of the leftmost adjacent pair whose means are similar
///
/// The pair (i, i+1) is similar iff `mean(i+1)` lies within
/// `mean(i) ± mean(i) * epsilon`. A zero left mean therefore only matches
/// an exactly zero right mean, and a negative left mean inverts the
/// interval so that distinct means never match.
fn first_similar_pair<T: Float>(slices: &SlicePartition<T>, epsilon: T) -> Option<usize> {
    for i in 0..slices.len().saturating_sub(1) {
        let left = slices.mean(i);
        let right = slices.mean(i + 1);
        let offset = left * epsilon;
        let dissimilar = left + offset < right || left - offset > right;
        if !dissimilar {
            return Some(i);
        }
    }
    None
}
