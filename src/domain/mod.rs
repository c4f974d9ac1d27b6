//! Domain types shared by the band computation.
//!
//! This module defines:
//!
//! - the run configuration (`BandConfig`)
//! - the estimator/distribution choices made per ensemble size
//!   (`SpreadEstimator`, `IntervalFamily`)
//! - the computed output (`ConfidenceBand`)

pub mod types;

pub use types::*;
