//! Two-sided intervals for location-scale families.
//!
//! For a location-scale distribution with location `μ` and scale `σ`, the
//! central interval enclosing a fraction `c` of the mass is
//!
//! ```text
//! [μ - q·σ, μ + q·σ],   q = F⁻¹((1 + c) / 2)
//! ```
//!
//! where `F⁻¹` is the quantile function of the *standardized* family. `q` only
//! depends on the family and `c`, so band computation evaluates it once and
//! reuses it at every index.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::domain::IntervalFamily;
use crate::error::BandError;

/// A standardized distribution that can produce central intervals.
pub trait TwoSidedInterval {
    /// Quantile of the standardized distribution (location 0, scale 1).
    fn standard_quantile(&self, p: f64) -> f64;

    /// Multiplier `q` such that `[μ - qσ, μ + qσ]` encloses `confidence`.
    fn critical_value(&self, confidence: f64) -> f64 {
        self.standard_quantile(0.5 * (1.0 + confidence))
    }

    /// `(lower, upper)` enclosing `confidence` around `loc`.
    fn interval(&self, confidence: f64, loc: f64, scale: f64) -> (f64, f64) {
        centered_interval(self.critical_value(confidence), loc, scale)
    }
}

/// `(loc - critical·scale, loc + critical·scale)`.
///
/// A zero scale collapses the interval onto the location.
pub fn centered_interval(critical: f64, loc: f64, scale: f64) -> (f64, f64) {
    if scale == 0.0 {
        return (loc, loc);
    }
    let h = critical * scale;
    (loc - h, loc + h)
}

impl TwoSidedInterval for Normal {
    fn standard_quantile(&self, p: f64) -> f64 {
        self.inverse_cdf(p)
    }
}

impl TwoSidedInterval for StudentsT {
    fn standard_quantile(&self, p: f64) -> f64 {
        self.inverse_cdf(p)
    }
}

/// Standardized distribution for an [`IntervalFamily`].
#[derive(Debug, Clone)]
pub enum StandardDistribution {
    StudentT(StudentsT),
    Normal(Normal),
}

impl StandardDistribution {
    pub fn new(family: IntervalFamily) -> Result<Self, BandError> {
        match family {
            IntervalFamily::StudentT { degrees_of_freedom } => {
                if degrees_of_freedom == 0 {
                    return Err(BandError::InsufficientSamples {
                        got: 1,
                        required: 2,
                    });
                }
                StudentsT::new(0.0, 1.0, degrees_of_freedom as f64)
                    .map(StandardDistribution::StudentT)
                    .map_err(|e| BandError::Distribution(format!("Student-t: {e}")))
            }
            IntervalFamily::Normal => Normal::new(0.0, 1.0)
                .map(StandardDistribution::Normal)
                .map_err(|e| BandError::Distribution(format!("normal: {e}"))),
        }
    }
}

impl TwoSidedInterval for StandardDistribution {
    fn standard_quantile(&self, p: f64) -> f64 {
        match self {
            StandardDistribution::StudentT(d) => d.standard_quantile(p),
            StandardDistribution::Normal(d) => d.standard_quantile(p),
        }
    }
}
