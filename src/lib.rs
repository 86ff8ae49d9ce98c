//! stepfit — adaptive piecewise-constant approximation of time series
//!
//! Approximates a noisy numeric time series (a resource metric sampled over
//! one task execution) by a small number of contiguous, piecewise-constant
//! segments, then quantifies how much structure the segmentation captures
//! that a single global-mean segment misses.
//!
//! The pipeline: raw series → fixed-size windows → adaptive mean-merge
//! clustering (tolerance escalates until the cluster count fits a budget) →
//! step and baseline signals → RMSE/GMRAE comparison.
//!
//! # Usage
//!
//! ```rust
//! use stepfit::{analyze, SegmentationConfig};
//!
//! let series = [1.0, 1.1, 0.9, 1.0, 8.0, 8.2, 7.9, 8.1];
//! let config = SegmentationConfig::default()
//!     .with_window_size(2)
//!     .with_epsilon(0.2);
//!
//! let analysis = analyze(&series, &config).unwrap();
//!
//! assert!(analysis.segmentation.count() <= config.cluster_budget);
//! // The step signal tracks the series more closely than the flat baseline
//! assert!(analysis.errors.rmse_improvement > 0.0);
//! ```

pub mod analysis;

pub use analysis::{analyze, SeriesAnalysis};

// Re-export workspace crates
pub use stepfit_approx::{
    baseline_signal, gmrae, relative_improvement, rmse, step_signal, ErrorComparison,
};
pub use stepfit_core::{counter_deltas, mean, Error, Result};
pub use stepfit_segment::{
    partition, MergeClusterer, Segmentation, SegmentationConfig, Segmenter, SegmenterProperties,
    SlicePartition, Span, Windows,
};
