//! Adaptive segmentation of numeric time series
//!
//! This crate splits a series into fixed-size windows and then greedily
//! merges adjacent windows whose means are within a relative tolerance,
//! widening the tolerance until the segment count fits a target budget.
//! The result is a small set of contiguous clusters whose concatenation
//! reproduces the input exactly.
//!
//! # Usage
//!
//! ```rust
//! use stepfit_segment::{MergeClusterer, SegmentationConfig, Segmenter};
//!
//! // Two flat regimes separated by a jump
//! let series = [1.0, 1.0, 1.0, 5.0, 5.0, 5.0];
//! let config = SegmentationConfig::default()
//!     .with_window_size(1)
//!     .with_epsilon(0.1);
//!
//! let clusterer = MergeClusterer::new(config);
//! let segmentation = clusterer.segment(&series).unwrap();
//!
//! assert_eq!(segmentation.count(), 2);
//! assert_eq!(segmentation.boundaries(), vec![0, 3]);
//! ```

pub mod config;
pub mod merge;
pub mod partition;
pub mod traits;
pub mod types;
pub mod window;

pub use config::SegmentationConfig;
pub use merge::MergeClusterer;
pub use partition::{SlicePartition, Span};
pub use traits::{Segmenter, SegmenterProperties};
pub use types::Segmentation;
pub use window::{partition, Windows};
