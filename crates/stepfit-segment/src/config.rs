//! Segmentation parameters

use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};
use stepfit_core::{Error, Result};

/// Parameters for windowing and adaptive mean-merge clustering
///
/// Configuration is an explicit value threaded through calls, never
/// process-wide state, so independent series can be analyzed concurrently
/// with different settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig<T: Float> {
    /// Number of samples per initial slice
    pub window_size: usize,
    /// Initial relative similarity tolerance
    pub epsilon: T,
    /// Tolerance increment applied on each escalation round
    pub epsilon_step: T,
    /// Maximum acceptable number of final clusters
    pub cluster_budget: usize,
    /// Escalation rounds allowed before detection gives up
    pub max_escalations: usize,
}

impl<T: Float + FromPrimitive> Default for SegmentationConfig<T> {
    fn default() -> Self {
        Self {
            window_size: 5,
            epsilon: T::from_f64(0.005).unwrap(),
            epsilon_step: T::from_f64(0.001).unwrap(),
            cluster_budget: 50,
            max_escalations: 10_000,
        }
    }
}

impl<T: Float> SegmentationConfig<T> {
    /// Create a configuration with the given core knobs
    ///
    /// The escalation bound keeps its default; override it with
    /// [`with_max_escalations`](Self::with_max_escalations).
    pub fn new(window_size: usize, epsilon: T, epsilon_step: T, cluster_budget: usize) -> Self {
        Self {
            window_size,
            epsilon,
            epsilon_step,
            cluster_budget,
            max_escalations: 10_000,
        }
    }

    /// Set the initial slice length
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the initial relative similarity tolerance
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the tolerance increment per escalation round
    pub fn with_epsilon_step(mut self, epsilon_step: T) -> Self {
        self.epsilon_step = epsilon_step;
        self
    }

    /// Set the maximum acceptable final cluster count
    pub fn with_cluster_budget(mut self, cluster_budget: usize) -> Self {
        self.cluster_budget = cluster_budget;
        self
    }

    /// Set the escalation-round safety bound
    pub fn with_max_escalations(mut self, max_escalations: usize) -> Self {
        self.max_escalations = max_escalations;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::invalid_config("window_size must be positive"));
        }
        if self.cluster_budget == 0 {
            return Err(Error::invalid_config("cluster_budget must be positive"));
        }
        // `!(x >= 0)` also rejects NaN
        if !(self.epsilon >= T::zero()) {
            return Err(Error::invalid_config("epsilon must be non-negative"));
        }
        if !(self.epsilon_step > T::zero()) {
            return Err(Error::invalid_config("epsilon_step must be positive"));
        }
        Ok(())
    }
}
