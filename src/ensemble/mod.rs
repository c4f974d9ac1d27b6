//! Ensembles of sampled curves.
//!
//! An ensemble holds `N` realizations of a fitted curve, each evaluated on the
//! same x-axis. They typically come from evaluating the model at every draw of
//! an MCMC flat chain.

pub mod samples;

pub use samples::*;
