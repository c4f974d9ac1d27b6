//! Per-index spread across an ensemble of realizations.
//!
//! The ensemble is stored as an `N × n` matrix: row `k` is realization `k`,
//! column `i` holds every realization's value at `x[i]`. The spread at index
//! `i` is the standard deviation of column `i`:
//!
//! ```text
//! s_i = sqrt( Σ_k (y_ki - ȳ_i)^2 / (N - ddof) )
//! ```
//!
//! Columns are independent, so they are reduced in parallel.

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use crate::domain::SpreadEstimator;
use crate::error::BandError;

/// Standard deviation of every column of `samples`.
///
/// Fails when the estimator's divisor `N - ddof` would be zero.
pub fn column_spread(
    samples: &DMatrix<f64>,
    estimator: SpreadEstimator,
) -> Result<DVector<f64>, BandError> {
    let n_rows = samples.nrows();
    let ddof = estimator.ddof();
    if n_rows <= ddof {
        return Err(BandError::InsufficientSamples {
            got: n_rows,
            required: ddof + 1,
        });
    }
    let divisor = (n_rows - ddof) as f64;

    let spreads: Vec<f64> = (0..samples.ncols())
        .into_par_iter()
        .map(|j| {
            let column = samples.column(j);
            let mean = column.iter().sum::<f64>() / n_rows as f64;
            let sum_sq: f64 = column.iter().map(|v| (v - mean).powi(2)).sum();
            (sum_sq / divisor).sqrt()
        })
        .collect();

    Ok(DVector::from_vec(spreads))
}
