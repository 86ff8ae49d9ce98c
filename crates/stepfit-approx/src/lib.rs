//! Approximation signals and error measures
//!
//! Expands a segmentation into a full-length piecewise-constant signal,
//! builds the single-segment global-mean baseline, and quantifies how much
//! structure the segmentation captures that the baseline misses (RMSE and
//! GMRAE, plus relative improvement).

pub mod metrics;
pub mod signal;
pub mod types;

pub use metrics::{gmrae, relative_improvement, rmse};
pub use signal::{baseline_signal, step_signal};
pub use types::ErrorComparison;
