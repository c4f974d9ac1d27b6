//! `conf-bands` library crate.
//!
//! Confidence bands around a best-fit curve from an ensemble of sampled fits
//! (e.g. every draw of an MCMC flat chain evaluated on the same x-axis).
//!
//! - small ensembles (`N <= 30`): Student-t interval, unbiased spread
//! - large ensembles (`N > 30`): Normal interval, population spread
//!
//! ```
//! use conf_bands::{compute_bands, DEFAULT_CONFIDENCE};
//!
//! let x = [0.0, 1.0, 2.0];
//! let f = [0.0, 1.0, 2.0];
//! let samples = vec![vec![0.1, 0.9, 2.1], vec![-0.1, 1.1, 1.9], vec![0.0, 1.0, 2.0]];
//! let (upper, lower) = compute_bands(&x, &f, &samples, DEFAULT_CONFIDENCE)?.into_parts();
//! # Ok::<(), conf_bands::BandError>(())
//! ```

pub mod bands;
pub mod domain;
pub mod ensemble;
pub mod error;
pub mod math;

pub use bands::{BandCalculator, compute_bands};
pub use domain::{
    BandConfig, ConfidenceBand, DEFAULT_CONFIDENCE, DEFAULT_SMALL_SAMPLE_LIMIT, IntervalFamily,
    SpreadEstimator,
};
pub use ensemble::Ensemble;
pub use error::BandError;
