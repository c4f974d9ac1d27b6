//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so a band
//! can be handed to plotting or export code outside this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BandError;

/// Fraction of probability mass enclosed when the caller does not choose one
/// (one standard deviation for a Normal).
pub const DEFAULT_CONFIDENCE: f64 = 0.68;

/// Largest ensemble size that still uses the Student-t branch.
pub const DEFAULT_SMALL_SAMPLE_LIMIT: usize = 30;

/// Run configuration for the band calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandConfig {
    /// Two-sided confidence level, must lie in the open interval `(0, 1)`.
    pub confidence: f64,
    /// Ensembles with `N <= small_sample_limit` realizations use the unbiased
    /// spread and a Student-t interval; larger ones use the population spread
    /// and a Normal interval.
    pub small_sample_limit: usize,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            small_sample_limit: DEFAULT_SMALL_SAMPLE_LIMIT,
        }
    }
}

impl BandConfig {
    pub fn with_confidence(confidence: f64) -> Self {
        Self {
            confidence,
            ..Self::default()
        }
    }

    /// Check scalar parameters. NaN is rejected along with the endpoints.
    pub fn validate(&self) -> Result<(), BandError> {
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(BandError::invalid(format!(
                "confidence must lie in (0,1), got {}",
                self.confidence
            )));
        }
        Ok(())
    }
}

/// How the per-index spread across the ensemble is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadEstimator {
    /// Divide the sum of squares by `N - 1`.
    Unbiased,
    /// Divide the sum of squares by `N`.
    Population,
}

impl SpreadEstimator {
    pub fn select(ensemble_size: usize, small_sample_limit: usize) -> Self {
        if ensemble_size <= small_sample_limit {
            SpreadEstimator::Unbiased
        } else {
            SpreadEstimator::Population
        }
    }

    /// Delta degrees of freedom subtracted from `N` in the divisor.
    pub fn ddof(self) -> usize {
        match self {
            SpreadEstimator::Unbiased => 1,
            SpreadEstimator::Population => 0,
        }
    }
}

/// Distribution family used for the two-sided interval at each index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum IntervalFamily {
    StudentT { degrees_of_freedom: usize },
    Normal,
}

impl IntervalFamily {
    /// Student-t with `N - 1` degrees of freedom for small ensembles, Normal
    /// otherwise. Every `N` lands in exactly one branch.
    pub fn select(ensemble_size: usize, small_sample_limit: usize) -> Self {
        if ensemble_size <= small_sample_limit {
            IntervalFamily::StudentT {
                degrees_of_freedom: ensemble_size.saturating_sub(1),
            }
        } else {
            IntervalFamily::Normal
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            IntervalFamily::StudentT { .. } => "Student-t",
            IntervalFamily::Normal => "normal (Gaussian)",
        }
    }
}

impl fmt::Display for IntervalFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalFamily::StudentT { degrees_of_freedom } => {
                write!(f, "{} (df={degrees_of_freedom})", self.display_name())
            }
            IntervalFamily::Normal => write!(f, "{}", self.display_name()),
        }
    }
}

/// Upper/lower bounds around a best-fit curve, index-aligned with its x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    confidence: f64,
    family: IntervalFamily,
    estimator: SpreadEstimator,
    upper: Vec<f64>,
    lower: Vec<f64>,
}

impl ConfidenceBand {
    pub(crate) fn new(
        confidence: f64,
        family: IntervalFamily,
        estimator: SpreadEstimator,
        upper: Vec<f64>,
        lower: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(upper.len(), lower.len());
        Self {
            confidence,
            family,
            estimator,
            upper,
            lower,
        }
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn family(&self) -> IntervalFamily {
        self.family
    }

    pub fn estimator(&self) -> SpreadEstimator {
        self.estimator
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Half the band width at every index.
    pub fn half_widths(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(&self.lower)
            .map(|(u, l)| 0.5 * (u - l))
            .collect()
    }

    /// Whether `value` lies inside the closed band at `index`.
    ///
    /// Out-of-range indices are never contained.
    pub fn contains(&self, index: usize, value: f64) -> bool {
        match (self.lower.get(index), self.upper.get(index)) {
            (Some(&lo), Some(&hi)) => lo <= value && value <= hi,
            _ => false,
        }
    }

    /// Consume the band, returning `(upper, lower)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.upper, self.lower)
    }
}
