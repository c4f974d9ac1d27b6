//! Confidence band computation.
//!
//! Responsibilities:
//!
//! - validate shapes and the confidence level
//! - pick the spread estimator and interval family from the ensemble size
//! - bound every index of the best-fit curve (parallel)

pub mod calculator;

pub use calculator::*;
