//! Student's t factors for small-sample Type-A uncertainty.
//!
//! Two-sided t multipliers as printed in introductory physics lab manuals,
//! tabulated for the sample sizes students actually take. Lookups are
//! exact: a sample count or confidence level outside the table is an
//! error, never an interpolation.
//!
//! | P \ n | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 15 | 20 |
//! |---|---|---|---|---|---|---|---|---|---|---|
//! | 0.683 | 1.32 | 1.20 | 1.14 | 1.11 | 1.09 | 1.08 | 1.07 | 1.06 | 1.04 | 1.03 |
//! | 0.90 | 2.92 | 2.35 | 2.13 | 2.02 | 1.94 | 1.90 | 1.86 | 1.83 | 1.76 | 1.73 |
//! | 0.95 | 4.30 | 3.38 | 2.78 | 2.57 | 2.46 | 2.37 | 2.31 | 2.26 | 2.15 | 2.09 |
//! | 0.99 | 9.93 | 5.84 | 4.60 | 4.03 | 3.71 | 3.50 | 3.36 | 3.25 | 2.98 | 2.86 |

use crate::error::{LabError, Result};

/// Confidence level assumed when none is given: one standard deviation
/// of a normal distribution.
pub const DEFAULT_CONFIDENCE: f64 = 0.683;

/// Sample counts with a tabulated t factor.
pub const SUPPORTED_SAMPLE_COUNTS: [usize; 10] = [3, 4, 5, 6, 7, 8, 9, 10, 15, 20];

/// A confidence level with a row in the t table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfidenceLevel {
    /// 68.3 %, one standard deviation.
    #[default]
    P683,
    /// 90 %.
    P90,
    /// 95 %.
    P95,
    /// 99 %.
    P99,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 4] = [
        ConfidenceLevel::P683,
        ConfidenceLevel::P90,
        ConfidenceLevel::P95,
        ConfidenceLevel::P99,
    ];

    /// The confidence level as a probability.
    pub fn value(self) -> f64 {
        match self {
            ConfidenceLevel::P683 => 0.683,
            ConfidenceLevel::P90 => 0.90,
            ConfidenceLevel::P95 => 0.95,
            ConfidenceLevel::P99 => 0.99,
        }
    }

    /// Matches a probability against the tabulated levels exactly.
    ///
    /// Used by both `TryFrom<f64>` and [`t_value`], which need different
    /// error payloads.
    fn from_probability(p: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == p)
    }

    /// Tabulated factors, in [`SUPPORTED_SAMPLE_COUNTS`] order.
    fn row(self) -> &'static [f64; 10] {
        match self {
            ConfidenceLevel::P683 => &[1.32, 1.20, 1.14, 1.11, 1.09, 1.08, 1.07, 1.06, 1.04, 1.03],
            ConfidenceLevel::P90 => &[2.92, 2.35, 2.13, 2.02, 1.94, 1.90, 1.86, 1.83, 1.76, 1.73],
            ConfidenceLevel::P95 => &[4.30, 3.38, 2.78, 2.57, 2.46, 2.37, 2.31, 2.26, 2.15, 2.09],
            ConfidenceLevel::P99 => &[9.93, 5.84, 4.60, 4.03, 3.71, 3.50, 3.36, 3.25, 2.98, 2.86],
        }
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = LabError;

    fn try_from(p: f64) -> Result<Self> {
        Self::from_probability(p).ok_or(LabError::UnsupportedParameter {
            sample_count: 0,
            confidence: p,
        })
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P = {}", self.value())
    }
}

/// Looks up the t factor for a typed confidence level.
///
/// # Errors
/// [`LabError::UnsupportedParameter`] if `sample_count` is not one of
/// [`SUPPORTED_SAMPLE_COUNTS`].
///
/// # Examples
/// ```
/// use u_labcalc::t_table::{t_value_for, ConfidenceLevel};
/// assert_eq!(t_value_for(ConfidenceLevel::P95, 10).unwrap(), 2.26);
/// assert!(t_value_for(ConfidenceLevel::P95, 11).is_err());
/// ```
pub fn t_value_for(level: ConfidenceLevel, sample_count: usize) -> Result<f64> {
    SUPPORTED_SAMPLE_COUNTS
        .iter()
        .position(|&n| n == sample_count)
        .map(|col| level.row()[col])
        .ok_or_else(|| {
            log::debug!("t table has no column for n = {sample_count} ({level})");
            LabError::UnsupportedParameter {
                sample_count,
                confidence: level.value(),
            }
        })
}

/// Looks up the t factor for `sample_count` readings at `confidence`.
///
/// `confidence` must be exactly one of 0.90, 0.95, 0.99 or 0.683.
///
/// # Errors
/// [`LabError::UnsupportedParameter`] if either key is outside the table.
///
/// # Examples
/// ```
/// use u_labcalc::t_table::t_value;
/// assert_eq!(t_value(3, 0.90).unwrap(), 2.92);
/// assert_eq!(t_value(20, 0.683).unwrap(), 1.03);
/// assert!(t_value(2, 0.683).is_err());
/// assert!(t_value(5, 0.5).is_err());
/// ```
pub fn t_value(sample_count: usize, confidence: f64) -> Result<f64> {
    match ConfidenceLevel::from_probability(confidence) {
        Some(level) => t_value_for(level, sample_count),
        None => {
            log::debug!("t table has no row for confidence {confidence}");
            Err(LabError::UnsupportedParameter {
                sample_count,
                confidence,
            })
        }
    }
}

/// Looks up the t factor for a set of readings, keyed by their count.
pub fn t_value_for_samples(values: &[f64], confidence: f64) -> Result<f64> {
    t_value(values.len(), confidence)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
