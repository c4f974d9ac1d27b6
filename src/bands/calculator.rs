//! Band calculator.
//!
//! Given:
//! - an x-axis `x` of length `n`
//! - the best-fit curve `f` evaluated on `x`
//! - an ensemble of `N` sampled curves on the same axis
//! - a confidence level `c ∈ (0, 1)`
//!
//! we compute, for every index `i`, the spread `s_i` of the ensemble at `x[i]`
//! and the central interval of the selected family centered on `f[i]` with
//! scale `s_i`:
//!
//! - `N <= 30`: unbiased spread, Student-t with `N - 1` degrees of freedom
//! - `N > 30`: population spread, Normal
//!
//! The 30-realization threshold is configurable through [`BandConfig`].

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{BandConfig, ConfidenceBand, IntervalFamily, SpreadEstimator};
use crate::ensemble::Ensemble;
use crate::error::BandError;
use crate::math::{StandardDistribution, TwoSidedInterval, centered_interval, column_spread};

/// Compute the confidence band of `f` from row-major `samples`.
///
/// Each entry of `samples` is one realization evaluated on `x`. Preconditions
/// are checked in order: `f` against `x`, every sample row against `x`, then
/// `conf`.
pub fn compute_bands<R: AsRef<[f64]>>(
    x: &[f64],
    f: &[f64],
    samples: &[R],
    conf: f64,
) -> Result<ConfidenceBand, BandError> {
    check_best_fit(x, f)?;
    let ensemble = Ensemble::from_rows(samples, x.len())?;
    BandCalculator::new(BandConfig::with_confidence(conf)).compute(x, f, &ensemble)
}

/// Band computation with an explicit [`BandConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BandCalculator {
    config: BandConfig,
}

impl BandCalculator {
    pub fn new(config: BandConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BandConfig {
        &self.config
    }

    /// Bound `f` at every index of `x` using the spread of `ensemble`.
    pub fn compute(
        &self,
        x: &[f64],
        f: &[f64],
        ensemble: &Ensemble,
    ) -> Result<ConfidenceBand, BandError> {
        check_best_fit(x, f)?;
        if ensemble.axis_len() != x.len() {
            return Err(BandError::shape(format!(
                "samples must match x in length (samples={}, x={})",
                ensemble.axis_len(),
                x.len()
            )));
        }
        self.config.validate()?;

        let confidence = self.config.confidence;
        let ensemble_size = ensemble.size();
        debug!(
            confidence_pct = confidence * 100.0,
            points = x.len(),
            "computing confidence band"
        );

        let estimator = SpreadEstimator::select(ensemble_size, self.config.small_sample_limit);
        let family = IntervalFamily::select(ensemble_size, self.config.small_sample_limit);
        debug!(%family, ensemble_size, ?estimator, "selected interval distribution");

        let distribution = StandardDistribution::new(family)?;
        let spread = column_spread(ensemble.values(), estimator)?;
        let critical = distribution.critical_value(confidence);

        let (lower, upper): (Vec<f64>, Vec<f64>) = f
            .par_iter()
            .zip(spread.as_slice().par_iter())
            .map(|(&loc, &scale)| centered_interval(critical, loc, scale))
            .unzip();

        Ok(ConfidenceBand::new(confidence, family, estimator, upper, lower))
    }
}

fn check_best_fit(x: &[f64], f: &[f64]) -> Result<(), BandError> {
    if f.len() != x.len() {
        return Err(BandError::shape(format!(
            "f must match x in length (f={}, x={})",
            f.len(),
            x.len()
        )));
    }
    Ok(())
}
