//! Report types comparing segmentation against the baseline

use std::fmt;

use crate::metrics::{gmrae, relative_improvement, rmse};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use stepfit_core::Result;

/// The four error scalars and the two relative improvements
///
/// `*_improvement` is `(baseline - step) / baseline`: the fraction of the
/// baseline's error that the piecewise-constant approximation removes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorComparison<T> {
    /// RMSE of the cluster-mean signal against the series
    pub rmse_step: T,
    /// RMSE of the global-mean baseline against the series
    pub rmse_baseline: T,
    /// Relative RMSE improvement of the step signal over the baseline
    pub rmse_improvement: T,
    /// GMRAE of the cluster-mean signal against the series
    pub gmrae_step: T,
    /// GMRAE of the global-mean baseline against the series
    pub gmrae_baseline: T,
    /// Relative GMRAE improvement of the step signal over the baseline
    pub gmrae_improvement: T,
}

impl<T: Float> ErrorComparison<T> {
    /// Evaluate both error measures for both signals against the series
    ///
    /// # Errors
    ///
    /// Propagates [`stepfit_core::Error::EmptyInput`] and
    /// [`stepfit_core::Error::SizeMismatch`] from the metrics, and returns
    /// [`stepfit_core::Error::DegenerateBaseline`] when a baseline error is
    /// exactly zero (the series is already constant).
    pub fn evaluate(step: &[T], baseline: &[T], actual: &[T]) -> Result<Self> {
        let rmse_step = rmse(step, actual)?;
        let rmse_baseline = rmse(baseline, actual)?;
        let rmse_improvement = relative_improvement(rmse_baseline, rmse_step)?;
        let gmrae_step = gmrae(step, actual)?;
        let gmrae_baseline = gmrae(baseline, actual)?;
        let gmrae_improvement = relative_improvement(gmrae_baseline, gmrae_step)?;
        Ok(Self {
            rmse_step,
            rmse_baseline,
            rmse_improvement,
            gmrae_step,
            gmrae_baseline,
            gmrae_improvement,
        })
    }
}

impl<T: Float + fmt::Display> fmt::Display for ErrorComparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "RMSE)  C={:.4}\tM={:.4}\t=> {:.4}",
            self.rmse_step, self.rmse_baseline, self.rmse_improvement
        )?;
        write!(
            f,
            "GMRAE) C={:.4}\tM={:.4}\t=> {:.4}",
            self.gmrae_step, self.gmrae_baseline, self.gmrae_improvement
        )
    }
}
