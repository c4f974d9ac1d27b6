//! Validated `N × n` sample matrix.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::error::BandError;

/// `N` realizations of a curve on a shared x-axis of length `n`.
///
/// Row `k` is realization `k`; column `i` holds every realization at `x[i]`.
/// An ensemble always has at least one realization.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    values: DMatrix<f64>,
}

impl Ensemble {
    /// Build from row slices, checking every row against `axis_len`.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], axis_len: usize) -> Result<Self, BandError> {
        if rows.is_empty() {
            return Err(BandError::shape("samples must contain at least one realization"));
        }
        if let Some((k, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != axis_len)
        {
            return Err(BandError::shape(format!(
                "sample row {k} has length {}, expected {axis_len} to match x",
                row.as_ref().len()
            )));
        }

        let values = DMatrix::from_fn(rows.len(), axis_len, |k, i| rows[k].as_ref()[i]);
        Ok(Self { values })
    }

    /// Wrap an existing `N × n` matrix.
    pub fn from_matrix(values: DMatrix<f64>) -> Result<Self, BandError> {
        if values.nrows() == 0 {
            return Err(BandError::shape("samples must contain at least one realization"));
        }
        Ok(Self { values })
    }

    /// Evaluate `model(x, params)` for every parameter draw on every `x`.
    ///
    /// Draws are evaluated in parallel; row `k` corresponds to `draws[k]`.
    pub fn from_parameter_draws<P, M>(x: &[f64], draws: &[P], model: M) -> Result<Self, BandError>
    where
        P: AsRef<[f64]> + Sync,
        M: Fn(f64, &[f64]) -> f64 + Sync,
    {
        if draws.is_empty() {
            return Err(BandError::shape("at least one parameter draw is required"));
        }

        let rows: Vec<Vec<f64>> = draws
            .par_iter()
            .map(|params| {
                let params = params.as_ref();
                x.iter().map(|&xi| model(xi, params)).collect()
            })
            .collect();

        Self::from_rows(&rows, x.len())
    }

    /// Number of realizations `N`.
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    /// Length `n` of the shared x-axis.
    pub fn axis_len(&self) -> usize {
        self.values.ncols()
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }
}
