//! End-to-end analysis of one (task, metric) unit
//!
//! One call per independent unit of work; units share nothing, so callers
//! may distribute them across threads however they like.

use num_traits::Float;
use stepfit_approx::{baseline_signal, step_signal, ErrorComparison};
use stepfit_core::Result;
use stepfit_segment::{MergeClusterer, Segmentation, SegmentationConfig, Segmenter};
use tracing::instrument;

/// Everything derived from one series: the cluster set, both approximation
/// signals, and the error comparison against the baseline
#[derive(Debug, Clone)]
pub struct SeriesAnalysis<T> {
    /// The final segmentation (clusters, boundaries, escalation metadata)
    pub segmentation: Segmentation<T>,
    /// Piecewise-constant signal, one cluster mean per span
    pub step_signal: Vec<T>,
    /// Constant signal holding the global series mean
    pub baseline_signal: Vec<T>,
    /// RMSE/GMRAE for both signals plus relative improvements
    pub errors: ErrorComparison<T>,
}

/// Segment a series and compare the approximation against the baseline
///
/// Fails fast with no partial result; callers processing many units should
/// catch per-unit errors, skip the unit, and continue with the rest.
#[instrument(skip(series, config), fields(samples = series.len()))]
pub fn analyze<T: Float>(series: &[T], config: &SegmentationConfig<T>) -> Result<SeriesAnalysis<T>> {
    let clusterer = MergeClusterer::new(config.clone());
    let segmentation = clusterer.segment(series)?;
    let step = step_signal(&segmentation);
    let baseline = baseline_signal(series)?;
    let errors = ErrorComparison::evaluate(&step, &baseline, series)?;
    Ok(SeriesAnalysis {
        segmentation,
        step_signal: step,
        baseline_signal: baseline,
        errors,
    })
}
